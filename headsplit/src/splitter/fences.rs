use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser as CmarkParser, Tag};

/// Byte ranges of every fenced code block in `source`, fences included.
pub fn fenced_code_ranges(source: &str) -> Vec<Range<usize>> {
    CmarkParser::new_ext(source, Options::empty())
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => Some(range),
            _ => None,
        })
        .collect()
}

/// Answers "is this offset inside a fence?" for offsets visited in increasing order.
pub struct FenceCursor {
    ranges: Vec<Range<usize>>,
    next: usize,
}

impl FenceCursor {
    pub fn new(source: &str) -> Self {
        FenceCursor {
            ranges: fenced_code_ranges(source),
            next: 0,
        }
    }

    pub fn contains(&mut self, offset: usize) -> bool {
        while let Some(range) = self.ranges.get(self.next) {
            if offset < range.end {
                return range.contains(&offset);
            }
            self.next += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_backtick_and_tilde_fences() {
        let source = "# Title\n```sh\n# comment\n```\ntext\n~~~\n## x\n~~~\n";
        let ranges = fenced_code_ranges(source);
        assert_eq!(ranges.len(), 2);
        let first = &source[ranges[0].clone()];
        assert!(first.starts_with("```sh\n# comment"));
        assert!(first.trim_end().ends_with("```"));
        assert!(source[ranges[1].clone()].contains("## x"));
    }

    #[test]
    fn indented_code_is_not_a_fence() {
        let source = "para\n\n    # indented\n";
        assert!(fenced_code_ranges(source).is_empty());
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        let source = "intro\n```\n# inside\n";
        let ranges = fenced_code_ranges(source);
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].contains(&source.find("# inside").unwrap()));
    }

    #[test]
    fn cursor_walks_forward() {
        let source = "a\n```\nb\n```\nc\n";
        let mut cursor = FenceCursor::new(source);
        assert!(!cursor.contains(0));
        assert!(cursor.contains(2));
        assert!(cursor.contains(6));
        assert!(!cursor.contains(source.len() - 2));
    }
}
