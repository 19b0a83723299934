//! Parse the HTTP status line out of curl's header callback.

/// Status of the final response: numeric code plus the text after the version
/// (e.g. `404 Not Found`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub code: u32,
    pub text: String,
}

/// Returns `Some` for lines like `HTTP/1.1 200 OK` or `HTTP/2 404`; `None` for header fields.
pub(crate) fn parse_status_line(line: &str) -> Option<StatusLine> {
    let line = line.trim();
    let rest = line.strip_prefix("HTTP/")?;
    let (_version, status) = rest.split_once(' ')?;
    let status = status.trim();
    let code_str = status.split_whitespace().next()?;
    let code = code_str.parse::<u32>().ok()?;
    Some(StatusLine {
        code,
        text: status.to_string(),
    })
}
