pub mod block;
pub mod header;
pub mod splitter;

pub use block::{Block, Metadata};
pub use header::{HeaderSpec, default_header_specs};
pub use splitter::{SplitError, Splitter};

/// Split a markdown document on the default `#`..`####` headers.
pub fn split(document: &str) -> Vec<Block> {
    Splitter::default().split(document)
}

/// Split a markdown document on a caller-supplied, ordered header list.
///
/// The first spec whose marker matches a line wins, so list order matters.
/// Specs with an empty label are ignored.
pub fn split_with_headers(
    document: &str,
    specs: impl IntoIterator<Item = HeaderSpec>,
) -> Result<Vec<Block>, SplitError> {
    Ok(Splitter::new(specs)?.split(document))
}
