//! Link extraction: every `<a href>` of an HTML document, in document order.

use scraper::{Html, Selector};
use thiserror::Error;

/// CSS selector for anchors carrying an `href` attribute.
pub const LINK_SELECTOR: &str = "a[href]";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}

/// Parses `html` and returns the raw `href` value of each matching anchor.
///
/// Values are returned verbatim: no trimming, no percent-decoding, no resolution.
/// The markup parser still applies its own normalization (e.g. `&amp;` → `&`).
/// Bytes that are not UTF-8 are replaced before parsing.
pub fn extract_links(html: &[u8]) -> Result<Vec<String>, ExtractError> {
    let selector = Selector::parse(LINK_SELECTOR).map_err(|e| ExtractError::Selector {
        selector: LINK_SELECTOR.to_string(),
        reason: e.to_string(),
    })?;
    let text = String::from_utf8_lossy(html);
    let document = Html::parse_document(&text);

    let links = document
        .select(&selector)
        .filter_map(|element| attr(element.value(), "href"))
        .map(str::to_string)
        .collect();
    Ok(links)
}

/// Attribute lookup by case-insensitive name.
fn attr<'a>(element: &'a scraper::node::Element, name: &str) -> Option<&'a str> {
    element
        .attrs()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_order() {
        let html = br#"<html><body>
            <a href="report.pdf">R</a>
            <p><a href="notes.txt">N</a></p>
            <a href="https://cdn.example.com/x.pdf">X</a>
        </body></html>"#;
        assert_eq!(
            extract_links(html).unwrap(),
            vec!["report.pdf", "notes.txt", "https://cdn.example.com/x.pdf"]
        );
    }

    #[test]
    fn attribute_name_case_insensitive() {
        let html = br#"<A HREF="a.pdf">a</A><a Href="b.pdf">b</a>"#;
        assert_eq!(extract_links(html).unwrap(), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn anchors_without_href_and_other_tags_skipped() {
        let html = br#"<a name="top">t</a><link href="style.css"><a href="">empty</a>"#;
        assert_eq!(extract_links(html).unwrap(), vec![""]);
    }

    #[test]
    fn values_not_trimmed_or_decoded() {
        let html = br#"<a href=" My%20File.pdf ">m</a><a href="a?x=1&amp;y=2">q</a>"#;
        assert_eq!(
            extract_links(html).unwrap(),
            vec![" My%20File.pdf ", "a?x=1&y=2"]
        );
    }

    #[test]
    fn malformed_markup_still_yields_links() {
        let html = b"<div><a href=\"one.pdf\">unclosed <a href='two.pdf'>";
        assert_eq!(extract_links(html).unwrap(), vec!["one.pdf", "two.pdf"]);
    }

    #[test]
    fn non_utf8_bytes_tolerated() {
        let mut html = b"<a href=\"r.pdf\">".to_vec();
        html.push(0xFF);
        html.extend_from_slice(b"</a>");
        assert_eq!(extract_links(&html).unwrap(), vec!["r.pdf"]);
    }

    #[test]
    fn empty_document() {
        assert!(extract_links(b"").unwrap().is_empty());
    }
}
