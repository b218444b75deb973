use crate::block::Metadata;

/// One open header while a document is being scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFrame {
    pub level: usize,
    pub label: String,
    pub text: String,
}

/// Open headers, outermost first, plus the label -> text view of them.
///
/// `metadata` always holds exactly one entry per frame on the stack.
#[derive(Debug, Default)]
pub struct HeaderStack {
    frames: Vec<HeaderFrame>,
    metadata: Metadata,
}

impl HeaderStack {
    pub fn new() -> Self {
        HeaderStack::default()
    }

    /// Close every frame at `frame.level` or deeper, then open `frame`.
    pub fn open(&mut self, frame: HeaderFrame) {
        while let Some(top) = self.frames.last() {
            if top.level < frame.level {
                break;
            }
            if let Some(closed) = self.frames.pop() {
                tracing::trace!(level = closed.level, label = %closed.label, "closing header");
                self.metadata.remove(&closed.label);
            }
        }
        self.metadata.insert(frame.label.clone(), frame.text.clone());
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[HeaderFrame] {
        &self.frames
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Owned copy of the current metadata.
    pub fn snapshot(&self) -> Metadata {
        self.metadata.clone()
    }
}
