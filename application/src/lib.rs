//! Application layer for primality
//!
//! This crate contains use cases, port definitions, and harness
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::HarnessParams;
pub use ports::{
    progress::{HarnessKind, NoProgress, ProgressNotifier},
    result_logger::{NoResultLogger, ResultEvent, ResultLogger},
};
pub use use_cases::run_accuracy::{RunAccuracyError, RunAccuracyInput, RunAccuracyUseCase};
pub use use_cases::run_speed::{RunSpeedError, RunSpeedInput, RunSpeedUseCase};
