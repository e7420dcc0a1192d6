//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor, Job},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(&self, job: &mut Job<'_>) -> Result<()> {
        let corpus = job.corpus;
        let extractor = job.extractor;

        for sentence in corpus.corpus().sentences() {
            job.check_abort()?;
            let result = extractor.extract_sentence(corpus, &sentence)?;
            job.emit(&result)?;
        }

        Ok(())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressTracker;
    use localmaxs_core::{
        CorpusBuilder, ExtractionConfig, IndexedCorpus, LocalMaxsExtractor, SentenceCandidates,
    };
    use std::sync::atomic::AtomicBool;

    fn corpus(lines: &[&str]) -> IndexedCorpus {
        let mut builder = CorpusBuilder::new();
        for line in lines {
            builder.push_line(line).unwrap();
        }
        let (vocabulary, corpus) = builder.build();
        IndexedCorpus::build(vocabulary, corpus).unwrap()
    }

    #[test]
    fn test_emits_every_sentence_in_order() {
        let corpus = corpus(&["A B A B", "B A", "A"]);
        let extractor =
            LocalMaxsExtractor::with_scp(ExtractionConfig::new(2, 3).unwrap()).unwrap();
        let mut sink: Vec<SentenceCandidates> = Vec::new();

        let mut job = Job::new(
            &corpus,
            &extractor,
            &mut sink,
            ProgressTracker::silent(),
            None,
        );
        SequentialExecutor.execute(&mut job).unwrap();
        assert_eq!(job.sentences_processed(), 3);

        let indices: Vec<usize> = sink.iter().map(|s| s.sentence_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_raised_flag_stops_before_first_sentence() {
        let corpus = corpus(&["A B", "B A"]);
        let extractor =
            LocalMaxsExtractor::with_scp(ExtractionConfig::new(2, 3).unwrap()).unwrap();
        let mut sink: Vec<SentenceCandidates> = Vec::new();
        let abort = AtomicBool::new(true);

        let mut job = Job::new(
            &corpus,
            &extractor,
            &mut sink,
            ProgressTracker::silent(),
            Some(&abort),
        );
        let err = SequentialExecutor.execute(&mut job).unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Aborted {
                sentences_processed: 0
            }
        ));
        drop(job);
        assert!(sink.is_empty());
    }
}
