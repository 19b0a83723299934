//! CLI command handlers.

mod get;
mod repair;

pub use get::run_get;
pub use repair::run_repair;
