//! Case-insensitive extension filter over hrefs.

/// Ordered list of accepted suffixes.
///
/// The href is lower-cased before comparison; the suffixes themselves are
/// compared exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns the first configured suffix that the lower-cased href ends with.
    pub fn matching_suffix(&self, href: &str) -> Option<&str> {
        let lower = href.to_lowercase();
        self.suffixes
            .iter()
            .find(|s| lower.ends_with(s.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, href: &str) -> bool {
        self.matching_suffix(href).is_some()
    }
}
