use crate::block::{Block, Metadata};
use crate::header::frame::{HeaderFrame, HeaderStack};
use crate::splitter::classify::Line;

/// Reduce classified lines, in document order, to blocks.
pub fn scan<'a>(lines: impl IntoIterator<Item = Line<'a>>) -> Vec<Block> {
    lines
        .into_iter()
        .fold(ScanState::default(), ScanState::step)
        .finish()
}

/// Content read since the last header, and the headers governing it.
struct Pending<'a> {
    lines: Vec<&'a str>,
    metadata: Metadata,
}

#[derive(Default)]
struct ScanState<'a> {
    stack: HeaderStack,
    pending: Option<Pending<'a>>,
    blocks: Vec<Block>,
}

impl<'a> ScanState<'a> {
    fn step(mut self, line: Line<'a>) -> Self {
        match line {
            Line::Header { level, label, text } => {
                // Pending content belongs to the headers open before this one.
                self.flush();
                tracing::trace!(level, label, text, "opening header");
                self.stack.open(HeaderFrame {
                    level,
                    label: label.to_string(),
                    text: text.to_string(),
                });
            }
            Line::Content(text) => match &mut self.pending {
                Some(pending) => pending.lines.push(text),
                None => {
                    self.pending = Some(Pending {
                        lines: vec![text],
                        metadata: self.stack.snapshot(),
                    })
                }
            },
            Line::Blank => {}
        }
        self
    }

    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            let block = Block::new(pending.lines.join("\n"), pending.metadata);
            tracing::debug!(
                index = self.blocks.len(),
                lines = pending.lines.len(),
                headers = block.metadata.len(),
                "emitting block"
            );
            self.blocks.push(block);
        }
    }

    fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.blocks
    }
}
