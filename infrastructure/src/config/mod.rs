//! Configuration file loading for primality
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PRIMALITY_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./primality.toml` or `./.primality.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/primality/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigUsage, FileAccuracyConfig, FileConfig, FileHarnessConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileSpeedConfig, FileTestCase,
};
pub use loader::ConfigLoader;
