//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use localmaxs_engine::ProgressObserver;
use std::time::Duration;

/// Sentence progress bar for extraction runs
///
/// One bar is reused across input files; each file resets its length.
pub struct ProgressReporter {
    progress_bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter; a quiet reporter draws nothing
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let pb = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sentences {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { progress_bar: pb }
    }

    /// Label the bar with the file being processed
    pub fn set_source(&self, source: &str) {
        self.progress_bar.set_message(source.to_string());
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl ProgressObserver for ProgressReporter {
    fn on_start(&self, total: usize) {
        self.progress_bar.set_length(total as u64);
        self.progress_bar.set_position(0);
    }

    fn on_progress(&self, done: usize) {
        self.progress_bar.set_position(done as u64);
    }

    fn on_finish(&self, done: usize) {
        self.progress_bar.set_position(done as u64);
    }
}
