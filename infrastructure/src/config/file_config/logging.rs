//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// results_file = "results.jsonl"   # JSONL result records
/// log_dir = "logs"                 # tracing output, in addition to stderr
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub results_file: Option<String>,
    pub log_dir: Option<String>,
}
