//! Progress observation

/// Receives progress notifications from a running extraction
///
/// Notifications are delivered from the thread that drives emission, always
/// with a non-decreasing sentence count.
pub trait ProgressObserver: Send + Sync {
    /// Extraction is about to start over `total` sentences
    fn on_start(&self, total: usize);

    /// `done` sentences have been emitted
    fn on_progress(&self, done: usize);

    /// Extraction finished after emitting `done` sentences
    fn on_finish(&self, done: usize);
}

/// Counts emitted sentences and notifies an observer every `interval`
pub struct ProgressTracker<'a> {
    observer: Option<&'a dyn ProgressObserver>,
    interval: usize,
    done: usize,
}

impl<'a> ProgressTracker<'a> {
    /// Create a tracker; an interval of zero is treated as one
    pub fn new(observer: Option<&'a dyn ProgressObserver>, interval: usize) -> Self {
        Self {
            observer,
            interval: interval.max(1),
            done: 0,
        }
    }

    /// Tracker that notifies nobody
    pub fn silent() -> Self {
        Self::new(None, 1)
    }

    /// Sentences emitted so far
    pub fn done(&self) -> usize {
        self.done
    }

    pub(crate) fn start(&self, total: usize) {
        if let Some(observer) = self.observer {
            observer.on_start(total);
        }
    }

    pub(crate) fn advance(&mut self) {
        self.done += 1;
        if self.done % self.interval == 0 {
            if let Some(observer) = self.observer {
                observer.on_progress(self.done);
            }
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(observer) = self.observer {
            observer.on_finish(self.done);
        }
    }
}
