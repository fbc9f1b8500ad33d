//! Machine-readable result reporting: one JSON record per line on the
//! wrapped writer, nothing else. Narration goes through `tracing` on
//! stderr, never through the reporter.
use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Line-oriented JSON record writer. Constructed explicitly by the caller
/// (one per run) so there is no global reporter state.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    writer: W,
}

impl Reporter<io::Stdout> {
    /// Reporter over the process stdout record stream.
    pub fn stdout() -> Self {
        Reporter::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize one record and terminate the line.
    pub fn emit<T: Serialize + ?Sized>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the reporter and hand back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
