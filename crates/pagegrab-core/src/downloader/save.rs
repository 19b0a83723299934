//! Save one matched link into the destination folder.

use anyhow::{Context, Result};
use crate::control::RunContext;
use crate::fetch::Fetcher;
use crate::url_model::derive_filename;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Downloads `href` (resolved against `base`) to `folder/<derived filename>`.
///
/// The file is created or truncated before the request is made, so a failed
/// transfer can leave a partial or empty file behind. The buffered writer is
/// flushed on every exit path; only the success path reports flush errors.
pub fn save_link(
    ctx: &RunContext,
    fetcher: &Fetcher,
    base: &str,
    href: &str,
    folder: &Path,
) -> Result<PathBuf> {
    let filename =
        derive_filename(href).with_context(|| format!("derive filename from {:?}", href))?;
    let save_path = folder.join(&filename);

    let file = File::create(&save_path)
        .with_context(|| format!("create {}", save_path.display()))?;
    let mut writer = BufWriter::new(file);

    let bytes = fetcher
        .get(ctx, base, href, &mut writer)
        .with_context(|| format!("download {:?}", href))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", save_path.display()))?;

    tracing::info!(path = %save_path.display(), bytes, "saved");
    Ok(save_path)
}
