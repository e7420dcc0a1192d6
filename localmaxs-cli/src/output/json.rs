//! JSON output formatter

use super::OutputFormatter;
use localmaxs_engine::{EngineError, Result, ResultEmitter, SentenceCandidates};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects every file's results and writes one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sources: Vec<SourceResults>,
}

/// Results of one input file
#[derive(Debug, Serialize)]
pub struct SourceResults {
    /// Input file the results came from
    pub source: String,
    /// Per-sentence candidates in corpus order
    pub sentences: Vec<SentenceCandidates>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sources: Vec::new(),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn current(&mut self) -> &mut SourceResults {
        if self.sources.is_empty() {
            self.sources.push(SourceResults {
                source: String::new(),
                sentences: Vec::new(),
            });
        }
        let last = self.sources.len() - 1;
        &mut self.sources[last]
    }
}

impl<W: Write> ResultEmitter for JsonFormatter<W> {
    fn emit_sentence(&mut self, result: &SentenceCandidates) -> Result<()> {
        self.current().sentences.push(result.clone());
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.sources.push(SourceResults {
            source: source.to_string(),
            sentences: Vec::new(),
        });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)
        };
        written.map_err(|e| EngineError::IoError(e.to_string()))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn as_emitter(&mut self) -> &mut dyn ResultEmitter {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localmaxs_core::DecodedCandidate;

    #[test]
    fn test_one_entry_per_source() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.begin_source("a.json").unwrap();
        formatter
            .emit_sentence(&SentenceCandidates {
                sentence_index: 0,
                candidates: vec![DecodedCandidate {
                    tokens: vec!["new".to_string(), "york".to_string()],
                    glue: 0.5,
                }],
            })
            .unwrap();
        formatter.finish().unwrap();
        formatter.begin_source("b.json").unwrap();
        formatter.close().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(value[0]["source"], "a.json");
        assert_eq!(value[0]["sentences"][0]["candidates"][0]["tokens"][1], "york");
        assert_eq!(value[0]["sentences"][0]["candidates"][0]["glue"], 0.5);
        assert_eq!(value[1]["sentences"].as_array().unwrap().len(), 0);
    }
}
