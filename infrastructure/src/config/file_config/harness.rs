//! Harness configuration from TOML (`[harness]` section)

use serde::{Deserialize, Serialize};

/// Raw harness configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHarnessConfig {
    /// Concurrent accuracy batches (defaults to available cores)
    pub parallelism: Option<usize>,
}
