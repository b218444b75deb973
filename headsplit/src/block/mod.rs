use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Header label -> header text for every header governing a block.
///
/// Entries iterate (and serialize) sorted by label, not in the order the
/// headers were opened: with labels `title` and `section`, `section` comes
/// first.
pub type Metadata = BTreeMap<String, String>;

/// A contiguous run of content and the headers in scope while it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stripped, non-empty lines joined with `\n`.
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Block {
    pub fn new(content: impl Into<String>, metadata: Metadata) -> Self {
        Block {
            content: content.into(),
            metadata,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, text) in &self.metadata {
            writeln!(f, "{}: {}", label, text)?;
        }
        if !self.metadata.is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(pairs: &[(&str, &str)]) -> Metadata {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn display_lists_metadata_then_content() {
        let block = Block::new(
            "line one\nline two",
            meta(&[("Header 1", "Intro"), ("Header 2", "Setup")]),
        );
        assert_eq!(
            block.to_string(),
            "Header 1: Intro\nHeader 2: Setup\n\nline one\nline two\n"
        );
    }

    #[test]
    fn display_without_metadata_is_just_content() {
        let block = Block::new("plain", Metadata::new());
        assert_eq!(block.to_string(), "plain\n");
    }

    #[test]
    fn metadata_serializes_sorted_by_label() {
        let block = Block::new("x", meta(&[("title", "Doc"), ("section", "Part")]));
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"content":"x","metadata":{"section":"Part","title":"Doc"}}"#
        );
    }

    #[test]
    fn lines_splits_content() {
        let block = Block::new("a\nb\nc", Metadata::new());
        assert_eq!(block.lines().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
