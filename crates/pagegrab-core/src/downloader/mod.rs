//! Download orchestrator.
//!
//! Fetches the seed page, extracts its anchors, keeps the hrefs that end in a
//! configured suffix, and saves each one into the destination folder. Links
//! are processed strictly one after another and the first error ends the run.

mod save;

use anyhow::{Context, Result};
use crate::config::RunConfig;
use crate::control::RunContext;
use crate::fetch::Fetcher;
use crate::links::extract_links;
use std::path::PathBuf;

pub use save::save_link;

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Anchors with an `href` found on the seed page.
    pub links_found: usize,
    /// Links that passed the extension filter.
    pub matched: usize,
    /// Files written, in document order.
    pub saved: Vec<PathBuf>,
}

/// Runs the pipeline with a default [`Fetcher`].
pub fn run(ctx: &RunContext, cfg: &RunConfig) -> Result<RunSummary> {
    run_with(ctx, cfg, &Fetcher::default())
}

/// Runs the pipeline using `fetcher` for the page and every matching link.
pub fn run_with(ctx: &RunContext, cfg: &RunConfig, fetcher: &Fetcher) -> Result<RunSummary> {
    let mut page = Vec::new();
    fetcher
        .get(ctx, "", &cfg.url, &mut page)
        .with_context(|| format!("fetch page {}", cfg.url))?;
    let links = extract_links(&page).with_context(|| format!("parse page {}", cfg.url))?;
    tracing::info!(url = %cfg.url, links = links.len(), "seed page parsed");

    let mut summary = RunSummary {
        links_found: links.len(),
        ..RunSummary::default()
    };

    for href in &links {
        let Some(suffix) = cfg.extensions.matching_suffix(href) else {
            tracing::debug!(href = %href, "no matching extension, skipped");
            continue;
        };
        tracing::debug!(href = %href, suffix, "matched");
        summary.matched += 1;

        let path = save_link(ctx, fetcher, &cfg.url, href, &cfg.folder)?;
        summary.saved.push(path);
    }

    tracing::info!(
        matched = summary.matched,
        saved = summary.saved.len(),
        "run complete"
    );
    Ok(summary)
}
