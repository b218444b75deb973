pub mod classify;
pub mod error;
pub mod fences;
mod scan;

pub use error::{MarkerProblem, SplitError};

use crate::block::Block;
use crate::header::{HeaderSpec, default_header_specs};
use classify::{Line, classify, classify_as_content};
use fences::FenceCursor;

/// Splits markdown documents into header-scoped blocks.
///
/// A `Splitter` holds no per-document state, so one instance can be shared
/// freely and reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    specs: Vec<HeaderSpec>,
    skip_fenced_code: bool,
}

impl Default for Splitter {
    fn default() -> Self {
        Splitter {
            specs: default_header_specs(),
            skip_fenced_code: false,
        }
    }
}

impl Splitter {
    /// Build a splitter for an ordered header list.
    ///
    /// Specs with an empty label are kept but never match. Every other spec
    /// needs a marker made of one repeated character.
    pub fn new(specs: impl IntoIterator<Item = HeaderSpec>) -> Result<Self, SplitError> {
        let specs: Vec<HeaderSpec> = specs.into_iter().collect();
        for (index, spec) in specs.iter().enumerate() {
            if spec.is_sentinel() {
                tracing::debug!(marker = %spec.marker, "ignoring header spec without a label");
                continue;
            }
            if let Some(problem) = marker_problem(&spec.marker) {
                return Err(SplitError::InvalidHeaderSpec {
                    index,
                    marker: spec.marker.clone(),
                    problem,
                });
            }
        }
        Ok(Splitter {
            specs,
            skip_fenced_code: false,
        })
    }

    /// Treat lines inside fenced code blocks as content, never as headers.
    pub fn skip_fenced_code(mut self, skip: bool) -> Self {
        self.skip_fenced_code = skip;
        self
    }

    pub fn specs(&self) -> &[HeaderSpec] {
        &self.specs
    }

    pub fn skips_fenced_code(&self) -> bool {
        self.skip_fenced_code
    }

    /// Split `document` into blocks, in document order.
    ///
    /// Lines are separated by `\n` only; a trailing `\r` is stripped along
    /// with other surrounding whitespace.
    pub fn split(&self, document: &str) -> Vec<Block> {
        let blocks = scan::scan(self.classify_lines(document));
        tracing::debug!(
            bytes = document.len(),
            blocks = blocks.len(),
            "split document"
        );
        blocks
    }

    /// Classify each line of `document` the way [`Splitter::split`] sees it.
    pub fn classify_lines<'a>(&'a self, document: &'a str) -> Vec<Line<'a>> {
        if self.skip_fenced_code {
            let mut fences = FenceCursor::new(document);
            line_offsets(document)
                .map(|(offset, raw)| {
                    if fences.contains(offset) {
                        classify_as_content(raw)
                    } else {
                        classify(raw, &self.specs)
                    }
                })
                .collect()
        } else {
            document
                .split('\n')
                .map(|raw| classify(raw, &self.specs))
                .collect()
        }
    }
}

fn marker_problem(marker: &str) -> Option<MarkerProblem> {
    let mut chars = marker.chars();
    let Some(first) = chars.next() else {
        return Some(MarkerProblem::Empty);
    };
    if chars.all(|c| c == first) {
        None
    } else {
        Some(MarkerProblem::MixedCharacters)
    }
}

/// `(byte offset, line)` for every `\n`-separated line.
fn line_offsets(document: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    document.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        (start, line)
    })
}
