//! Listing-session telemetry events and sinks.
//!
//! Sessions report fetch latency, dropped stale responses and failures
//! through a [`TelemetrySink`] so that hosts can observe how often the
//! out-of-order guard fires without scraping logs.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by a listing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A fetch for the latest request token was applied to the result set.
    FetchCompleted {
        /// Time between issuing the request and receiving the response.
        latency_ms: u64,
        /// Number of listings in the accepted page.
        item_count: usize,
    },
    /// A response arrived after a newer request had been issued.
    StaleResponseDropped {
        /// Token of the discarded response.
        token: u64,
        /// Latest token issued when the response arrived.
        latest: u64,
    },
    /// The latest fetch failed; the previous result set was kept.
    FetchFailed {
        /// Error message from the collaborator.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::StaleResponseDropped {
            token: 1,
            latest: 2,
        });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::StaleResponseDropped {
                token: 1,
                latest: 2,
            }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let json = serde_json::to_value(TelemetryEvent::FetchCompleted {
            latency_ms: 12,
            item_count: 3,
        })
        .expect("event should serialise");

        assert_eq!(
            json,
            serde_json::json!({"type": "fetch_completed", "latency_ms": 12, "item_count": 3})
        );
    }
}
