//! Href resolution and last-segment extraction.

/// Resolves `href` against `base` by string joining.
///
/// Absolute `http://` / `https://` hrefs are returned unchanged, as is any href
/// when `base` is empty. Otherwise exactly one `/` separates base and href,
/// unless `base` already ends with `/`.
pub fn resolve_target(base: &str, href: &str) -> String {
    if base.is_empty() || href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if base.ends_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}

/// Returns everything after the last `/` of `href` (the whole href if it has none).
pub fn last_path_segment(href: &str) -> &str {
    match href.rfind('/') {
        Some(idx) => &href[idx + 1..],
        None => href,
    }
}
