use std::io::{self, Write};

use clap::ValueEnum;

use headsplit::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Metadata lines, then content, per block
    Text,
    /// Pretty-printed JSON array of `{content, metadata}`
    Json,
}

pub fn write_blocks(out: &mut impl Write, blocks: &[Block], format: Format) -> io::Result<()> {
    match format {
        Format::Text => {
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "--- block {} ---", i + 1)?;
                write!(out, "{}", block)?;
            }
            Ok(())
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, blocks)?;
            writeln!(out)
        }
    }
}
