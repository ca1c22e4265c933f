//! Wall-clock timing around join invocations.
//!
//! Timing is a collaborator the caller wraps around a join, so the strategies
//! themselves stay free of side effects. A [`TimingSink`] receives one
//! measurement per call; [`timed`] does the measuring.

use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;

/// One labelled elapsed-time measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    /// Label the measurement was taken under.
    pub label: String,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3}ms", self.label, self.elapsed.as_secs_f64() * 1_000.0)
    }
}

/// Receiver of timing measurements.
///
/// Implementations must be `Send + Sync` so a single sink can be shared by
/// reference across every run.
pub trait TimingSink: Send + Sync + fmt::Debug {
    /// Records that the work labelled `label` took `elapsed`.
    fn record(&self, label: &str, elapsed: Duration);
}

/// Sink that logs each measurement at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTimingSink;

impl TimingSink for TracingTimingSink {
    fn record(&self, label: &str, elapsed: Duration) {
        let timing = Timing {
            label: label.to_string(),
            elapsed,
        };
        info!("{timing}");
    }
}

/// Sink that keeps every measurement in memory.
#[derive(Debug, Default)]
pub struct RecordingTimingSink {
    timings: Mutex<Vec<Timing>>,
}

impl RecordingTimingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every measurement recorded so far, oldest first.
    #[must_use]
    pub fn timings(&self) -> Vec<Timing> {
        match self.timings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of measurements recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.timings.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TimingSink for RecordingTimingSink {
    fn record(&self, label: &str, elapsed: Duration) {
        let timing = Timing {
            label: label.to_string(),
            elapsed,
        };
        match self.timings.lock() {
            Ok(mut guard) => guard.push(timing),
            Err(poisoned) => poisoned.into_inner().push(timing),
        }
    }
}

/// Runs `f`, reports its elapsed time to `sink` under `label`, and returns the
/// result together with the measurement.
pub fn timed<R, F>(label: &str, sink: &dyn TimingSink, f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    sink.record(label, elapsed);
    (result, elapsed)
}
