//! Infrastructure layer for primality
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigUsage, FileAccuracyConfig, FileConfig, FileHarnessConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileSpeedConfig, FileTestCase,
};
pub use logging::JsonlResultLogger;
