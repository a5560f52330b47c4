//! How harness and check results are rendered on stdout

use serde::{Deserialize, Serialize};

/// Rendering of `check`, `accuracy` and `speed` results
///
/// Set by `[output] format` or `-o`; progress and diagnostics always go
/// to stderr whatever the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pass/fail totals with only the failing cases; one median line per
    /// speed input
    Summary,
    /// A row per accuracy case, and median/mean/min/max columns per speed
    /// input
    Full,
    /// Machine-readable verdicts, outcomes and nanosecond timings
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_summary() {
        assert_eq!(OutputFormat::default(), OutputFormat::Summary);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
