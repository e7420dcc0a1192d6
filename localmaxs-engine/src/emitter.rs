//! Result sinks

use crate::error::Result;
use localmaxs_core::SentenceCandidates;
use std::io::Write;

/// Receives per-sentence results in corpus order
pub trait ResultEmitter {
    /// Emit the candidates of one sentence
    fn emit_sentence(&mut self, result: &SentenceCandidates) -> Result<()>;

    /// Flush any buffered output after the last sentence
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Collects results in memory
impl ResultEmitter for Vec<SentenceCandidates> {
    fn emit_sentence(&mut self, result: &SentenceCandidates) -> Result<()> {
        self.push(result.clone());
        Ok(())
    }
}

/// Line-oriented text output
///
/// One line per candidate, `<tokens> (glue <value>)`, followed by a `---`
/// line closing the sentence. Sentences without candidates still produce
/// their `---` line.
pub struct TextEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TextEmitter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultEmitter for TextEmitter<W> {
    fn emit_sentence(&mut self, result: &SentenceCandidates) -> Result<()> {
        for candidate in &result.candidates {
            writeln!(self.writer, "{candidate}")?;
        }
        writeln!(self.writer, "---")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localmaxs_core::DecodedCandidate;

    fn sentence(index: usize, candidates: Vec<(Vec<&str>, f64)>) -> SentenceCandidates {
        SentenceCandidates {
            sentence_index: index,
            candidates: candidates
                .into_iter()
                .map(|(tokens, glue)| DecodedCandidate {
                    tokens: tokens.into_iter().map(String::from).collect(),
                    glue,
                })
                .collect(),
        }
    }

    #[test]
    fn test_text_format() {
        let mut emitter = TextEmitter::new(Vec::new());
        emitter
            .emit_sentence(&sentence(0, vec![(vec!["new", "york"], 0.45), (vec!["A", "B"], 1.0)]))
            .unwrap();
        emitter.emit_sentence(&sentence(1, vec![])).unwrap();
        emitter.finish().unwrap();

        let output = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(output, "new york (glue 0.45)\nA B (glue 1.0)\n---\n---\n");
    }

    #[test]
    fn test_vec_collects() {
        let mut collected: Vec<SentenceCandidates> = Vec::new();
        collected.emit_sentence(&sentence(3, vec![])).unwrap();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].sentence_index, 3);
    }
}
