//! `pagegrab get` – fetch the seed page and download matching links.

use anyhow::{Context, Result};
use pagegrab_core::config::{PagegrabConfig, RunConfig};
use pagegrab_core::control::RunContext;
use pagegrab_core::downloader;
use pagegrab_core::fetch::Fetcher;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

pub async fn run_get(
    cfg: &PagegrabConfig,
    url: String,
    folder: PathBuf,
    ext: Vec<String>,
    timeout: Option<u64>,
) -> Result<()> {
    let extensions = if ext.is_empty() {
        cfg.extensions.clone()
    } else {
        ext
    };
    let run_cfg = RunConfig::new(url, folder, extensions)?;
    run_cfg.validate_folder()?;

    let timeout = timeout.map(Duration::from_secs).unwrap_or_else(|| cfg.timeout());
    let ctx = RunContext::with_timeout(timeout);
    let fetcher = Fetcher::new(cfg.connect_timeout());
    tracing::info!(
        url = %run_cfg.url,
        folder = %run_cfg.folder.display(),
        extensions = ?run_cfg.extensions.suffixes(),
        timeout_secs = timeout.as_secs(),
        "starting run"
    );

    let token = ctx.cancel_token();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling run");
            token.store(true, Ordering::Relaxed);
        }
    });

    let result =
        tokio::task::spawn_blocking(move || downloader::run_with(&ctx, &run_cfg, &fetcher)).await;
    interrupt.abort();
    let summary = result.context("download task failed to complete")??;

    println!(
        "saved {} of {} link(s) found",
        summary.saved.len(),
        summary.links_found
    );
    Ok(())
}
