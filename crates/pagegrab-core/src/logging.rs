//! Logging init: append to a log file under the XDG state dir, or stderr.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,pagegrab=debug,pagegrab_core=debug";

/// Path of the log file, `~/.local/state/pagegrab/pagegrab.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.get_state_home().join("pagegrab").join("pagegrab.log"))
}

/// Installs the global fmt subscriber writing to `writer`.
/// `RUST_LOG` overrides the default filter.
fn install<W>(writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
}

/// Logs to the XDG state log file.
/// Errs if the file cannot be opened so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    install(Mutex::new(file))?;
    tracing::info!("pagegrab logging initialized at {}", path.display());
    Ok(())
}

/// Logs to stderr only; used when [`init_logging`] fails.
pub fn init_logging_stderr() {
    let _ = install(std::io::stderr);
}
