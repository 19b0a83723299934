pub mod config;
pub mod control;
pub mod downloader;
pub mod fetch;
pub mod links;
pub mod logging;
pub mod repair;
pub mod url_model;

pub use config::{ConfigError, PagegrabConfig, RunConfig};
pub use control::RunContext;
pub use downloader::{run, run_with, RunSummary};
pub use fetch::{fetch, FetchError, Fetcher};
pub use links::extract_links;
pub use repair::{repair, Rename};
