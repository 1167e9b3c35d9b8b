//! Startup plumbing: project root, config sanity warnings, shared resources.

mod app_context;
mod config_warnings;
mod project_root;

pub use app_context::AppContext;
