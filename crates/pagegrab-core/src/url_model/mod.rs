//! URL modeling and filename derivation.
//!
//! Resolves hrefs against the seed URL and derives host-safe local filenames
//! from the last segment of an href.

mod decode;
mod extension;
mod os_name;
mod path;
mod sanitize;

pub use decode::{percent_decode_name, DecodeError};
pub use extension::ExtensionFilter;
pub use os_name::{name_bytes, name_from_bytes};
pub use path::{last_path_segment, resolve_target};
pub use sanitize::{sanitize_filename, sanitize_filename_bytes};

use std::ffi::OsString;

/// Derives the local filename for `href`: last path segment, percent-decoded, sanitized.
///
/// Escapes that decode to non-UTF-8 bytes are kept as raw bytes on unix.
///
/// # Examples
///
/// - `derive_filename("My%20File.pdf")` → `"My File.pdf"`
/// - `derive_filename("sub/dir:odd*name.pdf")` → `"dir_odd_name.pdf"`
pub fn derive_filename(href: &str) -> Result<OsString, DecodeError> {
    let decoded = percent_decode_name(last_path_segment(href).as_bytes())?;
    Ok(name_from_bytes(sanitize_filename_bytes(&decoded)))
}
