//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod accuracy;
mod harness;
mod logging;
mod output;
mod speed;

pub use accuracy::{FileAccuracyConfig, FileTestCase};
pub use harness::FileHarnessConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use speed::FileSpeedConfig;

use primality_application::HarnessParams;
use primality_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Which configured values a command reads once CLI overrides are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigUsage {
    /// `[accuracy]` cases and reference switch
    pub accuracy_cases: bool,
    /// `[speed] inputs`
    pub speed_inputs: bool,
    /// `[speed] iterations`
    pub speed_iterations: bool,
    /// `[harness] parallelism`
    pub parallelism: bool,
}

impl ConfigUsage {
    fn covers(&self, code: &ConfigIssueCode) -> bool {
        match code {
            ConfigIssueCode::InvalidCandidate { field, .. } => {
                (self.accuracy_cases && field.starts_with("accuracy."))
                    || (self.speed_inputs && field.starts_with("speed.inputs"))
            }
            ConfigIssueCode::ZeroCount { field } => match field.as_str() {
                "speed.iterations" => self.speed_iterations,
                "harness.parallelism" => self.parallelism,
                _ => true,
            },
            ConfigIssueCode::EmptyAccuracySuite => self.accuracy_cases,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Accuracy suite settings
    pub accuracy: FileAccuracyConfig,
    /// Speed suite settings
    pub speed: FileSpeedConfig,
    /// Shared harness settings
    pub harness: FileHarnessConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Result log and tracing file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Candidates that are not 64-bit integers
    /// 2. Counts that must be positive
    /// 3. An accuracy suite that would be empty
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Candidate parse validation
        issues.extend(self.accuracy.parse_cases().1);

        // 2. Speed section (inputs + iterations)
        issues.extend(self.speed.validate());

        if self.harness.parallelism == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroCount {
                    field: "harness.parallelism".to_string(),
                },
                "harness.parallelism must be at least 1",
            ));
        }

        // 3. Empty accuracy suite
        if !self.accuracy.include_reference && self.accuracy.cases.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyAccuracySuite,
                "accuracy.include_reference is false and no accuracy.cases are configured",
            ));
        }

        issues
    }

    /// Issues in the values a command actually reads.
    pub fn validate_for(&self, usage: ConfigUsage) -> Vec<ConfigIssue> {
        self.validate()
            .into_iter()
            .filter(|issue| usage.covers(&issue.code))
            .collect()
    }

    /// Harness parameters from `[speed]` and `[harness]`.
    pub fn harness_params(&self) -> HarnessParams {
        let params = HarnessParams::default()
            .with_iterations(self.speed.iterations)
            .with_warmup(self.speed.warmup);
        match self.harness.parallelism {
            Some(parallelism) => params.with_parallelism(parallelism),
            None => params,
        }
    }
}
