//! Progress notification port
//!
//! Defines the interface for reporting progress while a harness runs.

use primality_domain::{CaseOutcome, SpeedSample};

/// Which harness is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessKind {
    Accuracy,
    Speed,
}

impl HarnessKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarnessKind::Accuracy => "accuracy",
            HarnessKind::Speed => "speed",
        }
    }
}

impl std::fmt::Display for HarnessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during harness execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any candidate is evaluated
    fn on_suite_start(&self, kind: HarnessKind, total: usize);

    /// Called for each accuracy case as its batch completes
    fn on_case_complete(&self, _outcome: &CaseOutcome) {}

    /// Called after all iterations for one speed candidate
    fn on_sample_complete(&self, _sample: &SpeedSample) {}

    /// Called once after the last candidate
    fn on_suite_complete(&self, kind: HarnessKind);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_suite_start(&self, _kind: HarnessKind, _total: usize) {}
    fn on_suite_complete(&self, _kind: HarnessKind) {}
}
