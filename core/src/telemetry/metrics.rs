use serde::Serialize;
use std::sync::Mutex;

/// Counts of packages handled by one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<BatchSummary>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BatchSummary::default()),
        }
    }

    pub fn record_processed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.processed += 1;
        }
    }

    pub fn record_failed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failed += 1;
        }
    }

    pub fn snapshot(&self) -> BatchSummary {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_outcomes() {
        let recorder = MetricsRecorder::new();
        recorder.record_processed();
        recorder.record_processed();
        recorder.record_failed();
        assert_eq!(
            recorder.snapshot(),
            BatchSummary {
                processed: 2,
                failed: 1
            }
        );
    }
}
