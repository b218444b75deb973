pub mod frame;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A header prefix to split on, and the metadata key its text is stored under.
///
/// An empty `label` marks a spec that is recognized but never splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSpec {
    pub marker: String,
    #[serde(default)]
    pub label: String,
}

impl HeaderSpec {
    pub fn new(marker: impl Into<String>, label: impl Into<String>) -> Self {
        HeaderSpec {
            marker: marker.into(),
            label: label.into(),
        }
    }

    /// Nesting depth: the number of repeated marker characters.
    pub fn level(&self) -> usize {
        self.marker.chars().count()
    }

    pub fn is_sentinel(&self) -> bool {
        self.label.is_empty()
    }

    /// If `line` (already stripped) is a header for this spec, return its text.
    ///
    /// The marker must be followed by a space or end the line, so `####x`
    /// is not a `###` header.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(self.marker.as_str())?;
        if rest.is_empty() || rest.starts_with(' ') {
            Some(rest.trim())
        } else {
            None
        }
    }
}

impl fmt::Display for HeaderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "{} (ignored)", self.marker)
        } else {
            write!(f, "{} => {}", self.marker, self.label)
        }
    }
}

/// `#` through `####`, labelled `Header 1` through `Header 4`.
pub fn default_header_specs() -> Vec<HeaderSpec> {
    (1..=4)
        .map(|level| HeaderSpec::new("#".repeat(level), format!("Header {}", level)))
        .collect()
}
