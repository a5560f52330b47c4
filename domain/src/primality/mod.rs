//! The primality oracle and its harness primitives.
//!
//! - [`trial_division`]: `is_prime` with an integer square-root bound
//! - [`accuracy`]: test cases, per-case outcomes and reports
//! - [`timing`]: single-shot timing and summary statistics

pub mod accuracy;
pub mod timing;
pub mod trial_division;

pub use accuracy::{AccuracyReport, CaseOutcome, TestCase, accuracy_test};
pub use timing::{SpeedSample, TimingSummary, speed_test};
pub use trial_division::{evaluate, is_prime, smallest_divisor};
