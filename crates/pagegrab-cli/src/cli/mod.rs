//! CLI for pagegrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagegrab_core::config::{self, PagegrabConfig};
use std::path::PathBuf;

use commands::{run_get, run_repair};

/// Top-level CLI for pagegrab.
#[derive(Debug, Parser)]
#[command(name = "pagegrab")]
#[command(about = "pagegrab: download the files an HTML page links to", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a page and download every linked file with a matching extension.
    Get {
        /// HTML URL to download and get links from.
        #[arg(long)]
        url: Option<String>,

        /// Existing folder to download into.
        #[arg(long)]
        folder: Option<PathBuf>,

        /// Limit downloads to links ending in this suffix. Repeat for more; order is kept.
        #[arg(long = "ext", value_name = "SUFFIX")]
        ext: Vec<String>,

        /// Overall deadline for the run, in seconds (config default: 10).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Rename files in a folder whose names still contain percent escapes.
    Repair {
        /// Folder previously downloaded into.
        #[arg(long)]
        folder: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            PagegrabConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                folder,
                ext,
                timeout,
            } => {
                run_get(
                    &cfg,
                    url.unwrap_or_default(),
                    folder.unwrap_or_default(),
                    ext,
                    timeout,
                )
                .await?
            }
            CliCommand::Repair { folder } => run_repair(folder.unwrap_or_default()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
