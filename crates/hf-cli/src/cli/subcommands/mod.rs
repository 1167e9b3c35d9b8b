mod admin;
mod history;
mod technician;

pub use admin::AdminCommands;
pub use history::HistoryCommands;
pub use technician::TechnicianCommands;
