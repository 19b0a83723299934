//! Repair pass: rename folder entries whose names still carry percent escapes.
//!
//! Separate from the download run; callers invoke it explicitly.

use anyhow::{Context, Result};
use crate::url_model::{name_bytes, name_from_bytes, percent_decode_name, sanitize_filename_bytes};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// One rename performed by [`repair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: OsString,
    pub to: OsString,
}

/// Renames every entry of `folder` whose name contains `%` to its decoded,
/// sanitized form. Stops at the first decode or rename error.
///
/// Names are handled as raw bytes, so neither the old nor the new name has to be UTF-8.
pub fn repair(folder: &Path) -> Result<Vec<Rename>> {
    let entries =
        fs::read_dir(folder).with_context(|| format!("read directory {}", folder.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", folder.display()))?;
        names.push(entry.file_name());
    }
    names.sort();

    let mut renames = Vec::new();
    for name in names {
        let bytes = name_bytes(&name);
        if !bytes.contains(&b'%') {
            continue;
        }
        let decoded = percent_decode_name(&bytes).with_context(|| format!("decode {:?}", name))?;
        let next = name_from_bytes(sanitize_filename_bytes(&decoded));
        tracing::info!("fix {:?} -> {:?}", name, next);
        fs::rename(folder.join(&name), folder.join(&next))
            .with_context(|| format!("rename {:?} -> {:?}", name, next))?;
        renames.push(Rename { from: name, to: next });
    }
    Ok(renames)
}
