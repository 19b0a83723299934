//! `pagegrab repair` – rename percent-escaped files in a download folder.

use anyhow::{Context, Result};
use pagegrab_core::config;
use pagegrab_core::repair;
use std::path::PathBuf;

pub async fn run_repair(folder: PathBuf) -> Result<()> {
    config::validate_folder(&folder)?;
    let renames = tokio::task::spawn_blocking(move || repair::repair(&folder))
        .await
        .context("repair task failed to complete")??;

    for rename in &renames {
        println!("fix {:?} -> {:?}", rename.from, rename.to);
    }
    if renames.is_empty() {
        println!("Nothing to fix.");
    }
    Ok(())
}
