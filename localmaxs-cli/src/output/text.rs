//! Plain text output formatter

use super::OutputFormatter;
use localmaxs_engine::{Result, ResultEmitter, SentenceCandidates, TextEmitter};
use std::io::Write;

/// Plain text formatter
///
/// Output of several input files is concatenated without separators beyond
/// the per-sentence `---` lines.
pub struct TextFormatter<W: Write> {
    inner: TextEmitter<W>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            inner: TextEmitter::new(writer),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write> ResultEmitter for TextFormatter<W> {
    fn emit_sentence(&mut self, result: &SentenceCandidates) -> Result<()> {
        self.inner.emit_sentence(result)
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        log::debug!("writing text results for {source}");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.inner.finish()
    }

    fn as_emitter(&mut self) -> &mut dyn ResultEmitter {
        self
    }
}
