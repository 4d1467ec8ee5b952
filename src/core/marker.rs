//! Matching of `location <path>` block headers

/// Directive keyword that opens a location block
const LOCATION_KEYWORD: &str = "location";

/// Identifies the first line of a location block for a given path.
///
/// A line matches when it contains `location`, then at least one
/// whitespace character, then the configured path. The path is matched as
/// a prefix, so `/api/images` also matches `/api/images/thumbs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMarker {
    path: String,
}

impl LocationMarker {
    /// Create a marker for the given location path
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Get the location path this marker looks for
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check whether a line opens a block for this location
    pub fn matches(&self, line: &str) -> bool {
        line.match_indices(LOCATION_KEYWORD).any(|(idx, keyword)| {
            let rest = &line[idx + keyword.len()..];
            let target = rest.trim_start();
            target.len() < rest.len() && target.starts_with(self.path.as_str())
        })
    }
}
