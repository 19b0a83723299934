//! Strict percent-decoding for filenames (path-unescape semantics).

use percent_encoding::percent_decode;
use thiserror::Error;

/// Failure to percent-decode a filename.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits.
    #[error("invalid escape {escape:?} in {input:?}")]
    InvalidEscape { input: String, escape: String },
}

/// Decodes `%XX` escapes in `input` into raw bytes.
///
/// Unlike form decoding, `+` is left as-is. Every `%` must start a complete
/// two-digit hex escape. The decoded bytes need not be UTF-8.
pub fn percent_decode_name(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'%' {
            let escape = input.get(i..(i + 3).min(input.len())).unwrap_or_default();
            let valid = escape.len() == 3
                && escape[1].is_ascii_hexdigit()
                && escape[2].is_ascii_hexdigit();
            if !valid {
                return Err(DecodeError::InvalidEscape {
                    input: String::from_utf8_lossy(input).into_owned(),
                    escape: String::from_utf8_lossy(escape).into_owned(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(percent_decode(input).collect())
}
