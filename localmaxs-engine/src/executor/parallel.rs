//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor, Job},
};
use localmaxs_core::{CoreError, Sentence, SentenceCandidates};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Parallel multi-threaded executor
///
/// Sentences are extracted in batches on the pool; each batch is collected
/// in input order and emitted before the next batch starts, so output order
/// matches the sequential executor.
#[derive(Debug)]
pub struct ParallelExecutor {
    batch_size: usize,
    pool: Option<ThreadPool>,
}

impl ParallelExecutor {
    /// Create an executor; with `threads` set a dedicated pool is built,
    /// otherwise rayon's global pool is used
    pub fn new(batch_size: usize, threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            batch_size: batch_size.max(1),
            pool,
        })
    }

    /// Sentences per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Threads available to one batch
    pub fn thread_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn execute(&self, job: &mut Job<'_>) -> Result<()> {
        let corpus = job.corpus;
        let extractor = job.extractor;
        let sentences: Vec<Sentence<'_>> = corpus.corpus().sentences().collect();

        for batch in sentences.chunks(self.batch_size) {
            job.check_abort()?;

            let results = self.install(|| {
                batch
                    .par_iter()
                    .map(|sentence| extractor.extract_sentence(corpus, sentence))
                    .collect::<std::result::Result<Vec<SentenceCandidates>, CoreError>>()
            })?;

            for result in &results {
                job.emit(result)?;
            }
        }

        Ok(())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;
    use crate::progress::ProgressTracker;
    use localmaxs_core::{CorpusBuilder, ExtractionConfig, IndexedCorpus, LocalMaxsExtractor};

    fn corpus(sentences: usize) -> IndexedCorpus {
        let lines = ["a b c a b", "b c d", "c a b d a", "d d a b"];
        let mut builder = CorpusBuilder::new();
        for line in lines.iter().cycle().take(sentences) {
            builder.push_line(line).unwrap();
        }
        let (vocabulary, corpus) = builder.build();
        IndexedCorpus::build(vocabulary, corpus).unwrap()
    }

    fn run(executor: &dyn Executor, corpus: &IndexedCorpus) -> Vec<SentenceCandidates> {
        let extractor =
            LocalMaxsExtractor::with_scp(ExtractionConfig::new(2, 4).unwrap()).unwrap();
        let mut sink: Vec<SentenceCandidates> = Vec::new();
        let mut job = Job::new(corpus, &extractor, &mut sink, ProgressTracker::silent(), None);
        executor.execute(&mut job).unwrap();
        sink
    }

    #[test]
    fn test_matches_sequential_order() {
        let corpus = corpus(37);
        let parallel = ParallelExecutor::new(5, Some(3)).unwrap();

        assert_eq!(run(&parallel, &corpus), run(&SequentialExecutor, &corpus));
    }

    #[test]
    fn test_dedicated_pool_size() {
        let executor = ParallelExecutor::new(512, Some(2)).unwrap();
        assert_eq!(executor.thread_count(), 2);
        assert_eq!(executor.batch_size(), 512);
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let executor = ParallelExecutor::new(0, None).unwrap();
        assert_eq!(executor.batch_size(), 1);
    }
}
