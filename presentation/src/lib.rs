//! Presentation layer for primality
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters and exit statuses.

pub mod cli;
pub mod output;
pub mod progress;
pub mod status;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{CheckEntry, OutputFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use status::RunStatus;
