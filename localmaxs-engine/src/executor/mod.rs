//! Execution strategies for sentence extraction

use crate::emitter::ResultEmitter;
use crate::error::{EngineError, Result};
use crate::progress::ProgressTracker;
use localmaxs_core::{IndexedCorpus, LocalMaxsExtractor, SentenceCandidates};
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded, strict corpus order
    Sequential,
    /// Batches of sentences on a thread pool, emitted in corpus order
    Parallel,
    /// Choose between the two from the sentence count
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extraction run: the inputs, the sink and the running counters
pub struct Job<'a> {
    /// Indexed corpus being processed
    pub corpus: &'a IndexedCorpus,
    /// Extractor applied to every sentence
    pub extractor: &'a LocalMaxsExtractor,
    emitter: &'a mut dyn ResultEmitter,
    progress: ProgressTracker<'a>,
    abort: Option<&'a AtomicBool>,
    candidates: usize,
}

impl<'a> Job<'a> {
    /// Create a job
    pub fn new(
        corpus: &'a IndexedCorpus,
        extractor: &'a LocalMaxsExtractor,
        emitter: &'a mut dyn ResultEmitter,
        progress: ProgressTracker<'a>,
        abort: Option<&'a AtomicBool>,
    ) -> Self {
        Self {
            corpus,
            extractor,
            emitter,
            progress,
            abort,
            candidates: 0,
        }
    }

    /// Sentences emitted so far
    pub fn sentences_processed(&self) -> usize {
        self.progress.done()
    }

    /// Candidates emitted so far
    pub fn candidates_emitted(&self) -> usize {
        self.candidates
    }

    /// Fail with [`EngineError::Aborted`] once the abort flag is raised
    pub fn check_abort(&self) -> Result<()> {
        match self.abort {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(EngineError::Aborted {
                sentences_processed: self.sentences_processed(),
            }),
            _ => Ok(()),
        }
    }

    /// Hand one sentence's result to the emitter
    pub fn emit(&mut self, result: &SentenceCandidates) -> Result<()> {
        self.emitter.emit_sentence(result)?;
        self.candidates += result.candidates.len();
        self.progress.advance();
        Ok(())
    }

    pub(crate) fn start(&self, total: usize) {
        self.progress.start(total);
    }

    pub(crate) fn finish(&mut self) -> Result<()> {
        self.emitter.finish()?;
        self.progress.finish();
        Ok(())
    }
}

/// Strategy that drives a [`Job`] over every sentence of its corpus
pub trait Executor: Send + Sync {
    /// Extract and emit every sentence in corpus order
    fn execute(&self, job: &mut Job<'_>) -> Result<()>;

    /// The execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Pick sequential or parallel execution from the sentence count
pub fn auto_select(sentence_count: usize, threshold: usize) -> ExecutionMode {
    if sentence_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
