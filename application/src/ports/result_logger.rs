//! Port for structured result logging.
//!
//! Defines the [`ResultLogger`] trait for recording harness results
//! (per-case outcomes, timing samples, summaries) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures results in
//! a machine-readable format (JSONL).

use serde_json::Value;

/// A structured result event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The timestamp is added by the writer.
pub struct ResultEvent {
    /// Event type identifier (e.g., "accuracy_case", "speed_sample").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ResultEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging result events to a structured log.
///
/// The `log` method is synchronous and non-fallible. Write failures are
/// dropped.
pub trait ResultLogger: Send + Sync {
    /// Record a result event.
    fn log(&self, event: ResultEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoResultLogger;

impl ResultLogger for NoResultLogger {
    fn log(&self, _event: ResultEvent) {}
}
