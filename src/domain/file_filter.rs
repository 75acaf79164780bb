use std::path::Path;

/// Default extension of definition files.
pub const DEFAULT_EXTENSION: &str = "toml";

/// Acceptance predicate that matches file names by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extension: String,
}

impl ExtensionFilter {
    /// Create a filter; a leading `.` is ignored and matching is case-insensitive.
    pub fn new(extension: &str) -> Self {
        Self { extension: extension.trim_start_matches('.').to_ascii_lowercase() }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether the file name carries the configured extension.
    pub fn accepts(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}
