pub mod admin;
pub mod appliances;
pub mod chat;
pub mod diagnose;
pub mod dispatch;
pub mod history;
pub mod symptoms;
pub mod technician;
