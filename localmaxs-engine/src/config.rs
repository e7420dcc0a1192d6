//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Minimum sentence count for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Sentences handed to the pool per batch
    pub batch_size: usize,
    /// Sentences between two progress notifications
    pub progress_interval: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 2_000,
            batch_size: 512,
            progress_interval: 10,
        }
    }
}

impl EngineConfig {
    /// Configuration that always runs on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Configuration that always uses the thread pool
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(EngineError::ConfigError(
                "batch size must be at least 1".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(EngineError::ConfigError(
                "progress interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
