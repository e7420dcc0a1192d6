//! Markdown output formatter

use super::OutputFormatter;
use localmaxs_engine::{Result, ResultEmitter, SentenceCandidates};
use std::io::Write;

/// Markdown formatter - one candidate table per input file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    candidate_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            candidate_count: 0,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultEmitter for MarkdownFormatter<W> {
    fn emit_sentence(&mut self, result: &SentenceCandidates) -> Result<()> {
        for candidate in &result.candidates {
            self.candidate_count += 1;
            writeln!(
                self.writer,
                "| {} | {} | {:?} |",
                result.sentence_index,
                candidate.text(),
                candidate.glue
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Sentence | Candidate | Glue |")?;
        writeln!(self.writer, "|---:|---|---:|")?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total candidates: {}*", self.candidate_count)?;
        self.writer.flush()?;
        Ok(())
    }

    fn as_emitter(&mut self) -> &mut dyn ResultEmitter {
        self
    }
}
