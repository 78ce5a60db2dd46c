use std::sync::Mutex;

/// Submission lifecycle counters surfaced in the status area.
#[derive(Debug)]
pub struct SubmitMetrics {
    inner: Mutex<Counters>,
}

#[derive(Debug)]
struct Counters {
    submitted: usize,
    solved: usize,
    failed: usize,
}

impl SubmitMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                submitted: 0,
                solved: 0,
                failed: 0,
            }),
        }
    }

    pub fn record_submitted(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.submitted += 1;
        }
    }

    pub fn record_solved(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.solved += 1;
        }
    }

    pub fn record_failed(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.failed += 1;
        }
    }

    /// (submitted, solved, failed)
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.submitted, counters.solved, counters.failed)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for SubmitMetrics {
    fn default() -> Self {
        Self::new()
    }
}
