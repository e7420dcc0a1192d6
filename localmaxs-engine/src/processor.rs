//! Extraction processor and builder

use crate::{
    config::EngineConfig,
    emitter::ResultEmitter,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, Job, SequentialExecutor},
    progress::{ProgressObserver, ProgressTracker},
};
use localmaxs_core::{ExtractionConfig, GlueFunction, GlueKind, IndexedCorpus, LocalMaxsExtractor};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// What one extraction run did
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSummary {
    /// Sentences emitted
    pub sentences: usize,
    /// Candidates emitted across all sentences
    pub candidates: usize,
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

/// Runs LocalMaxs extraction over an indexed corpus
///
/// The processor holds no corpus state; one processor can be reused for any
/// number of corpora.
pub struct ExtractionProcessor {
    extractor: LocalMaxsExtractor,
    config: EngineConfig,
    observer: Option<Arc<dyn ProgressObserver>>,
    abort: Option<Arc<AtomicBool>>,
    #[cfg(feature = "parallel")]
    parallel: Option<ParallelExecutor>,
}

impl ExtractionProcessor {
    /// Create a processor with default SCP extraction and engine settings
    pub fn new() -> Result<Self> {
        ExtractionProcessorBuilder::new().build()
    }

    /// Create a processor from an extractor and engine configuration
    pub fn with_config(extractor: LocalMaxsExtractor, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let parallel = if config.execution_mode == ExecutionMode::Sequential {
            None
        } else {
            Some(ParallelExecutor::new(config.batch_size, config.threads)?)
        };

        Ok(Self {
            extractor,
            config,
            observer: None,
            abort: None,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }

    /// The extractor applied to each sentence
    pub fn extractor(&self) -> &LocalMaxsExtractor {
        &self.extractor
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mode that a corpus of `sentence_count` sentences would run under
    pub fn select_mode(&self, sentence_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(sentence_count, self.config.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }

    /// Extract every sentence of `corpus` and hand results to `emitter` in
    /// corpus order
    pub fn process(
        &self,
        corpus: &IndexedCorpus,
        emitter: &mut dyn ResultEmitter,
    ) -> Result<ProcessingSummary> {
        let start_time = Instant::now();
        let total = corpus.corpus().sentence_count();
        let mode = self.select_mode(total);

        log::info!(
            "extracting {} sentences ({} tokens) with {} glue, ngram sizes {}..{}, {} mode",
            total,
            corpus.corpus().corpus_size(),
            self.extractor.glue().name(),
            self.extractor.config().min_ngram,
            self.extractor.config().max_ngram,
            mode
        );

        let progress = ProgressTracker::new(self.observer.as_deref(), self.config.progress_interval);
        let mut job = Job::new(
            corpus,
            &self.extractor,
            emitter,
            progress,
            self.abort.as_deref(),
        );

        job.start(total);
        self.executor_for(mode).execute(&mut job)?;
        job.finish()?;

        let summary = ProcessingSummary {
            sentences: job.sentences_processed(),
            candidates: job.candidates_emitted(),
            mode_used: mode,
            elapsed: start_time.elapsed(),
        };
        log::debug!(
            "emitted {} candidates from {} sentences in {:?}",
            summary.candidates,
            summary.sentences,
            summary.elapsed
        );
        Ok(summary)
    }

    #[cfg(feature = "parallel")]
    fn executor_for(&self, mode: ExecutionMode) -> &dyn Executor {
        match (mode, &self.parallel) {
            (ExecutionMode::Parallel, Some(parallel)) => parallel as &dyn Executor,
            _ => &SequentialExecutor,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn executor_for(&self, _mode: ExecutionMode) -> &dyn Executor {
        &SequentialExecutor
    }
}

/// Builder for ExtractionProcessor
///
/// Provides a fluent interface for configuring the processor.
pub struct ExtractionProcessorBuilder {
    extraction: ExtractionConfig,
    glue: Arc<dyn GlueFunction>,
    engine: EngineConfig,
    observer: Option<Arc<dyn ProgressObserver>>,
    abort: Option<Arc<AtomicBool>>,
}

impl Default for ExtractionProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            glue: GlueKind::default().build(),
            engine: EngineConfig::default(),
            observer: None,
            abort: None,
        }
    }

    /// Set the ngram size bounds
    pub fn ngram_range(mut self, min_ngram: usize, max_ngram: usize) -> Self {
        self.extraction = ExtractionConfig {
            min_ngram,
            max_ngram,
        };
        self
    }

    /// Set the extraction configuration
    pub fn extraction_config(mut self, config: ExtractionConfig) -> Self {
        self.extraction = config;
        self
    }

    /// Use one of the built-in glue measures
    pub fn glue(mut self, kind: GlueKind) -> Self {
        self.glue = kind.build();
        self
    }

    /// Use a custom glue measure
    pub fn glue_function(mut self, glue: Arc<dyn GlueFunction>) -> Self {
        self.glue = glue;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.engine.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.engine.threads = count;
        self
    }

    /// Set the sentence count from which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.engine.parallel_threshold = sentences;
        self
    }

    /// Set the parallel batch size
    pub fn batch_size(mut self, sentences: usize) -> Self {
        self.engine.batch_size = sentences;
        self
    }

    /// Set the number of sentences between progress notifications
    pub fn progress_interval(mut self, sentences: usize) -> Self {
        self.engine.progress_interval = sentences;
        self
    }

    /// Replace the whole engine configuration
    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine = config;
        self
    }

    /// Attach a progress observer
    pub fn observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Attach an abort flag checked between sentences or batches
    pub fn abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<ExtractionProcessor> {
        let extractor = LocalMaxsExtractor::new(self.extraction, self.glue)?;
        let mut processor = ExtractionProcessor::with_config(extractor, self.engine)?;
        processor.observer = self.observer;
        processor.abort = self.abort;
        Ok(processor)
    }
}
