//! Structured configuration issues.
//!
//! Configuration loading never fails on a bad entry it can skip; instead
//! each problem is reported as a [`ConfigIssue`] with a severity so the
//! caller can decide whether to abort.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A configured candidate is not an integer or does not fit in 64 bits.
    InvalidCandidate { field: String, value: String },
    /// A count that must be positive was set to zero.
    ZeroCount { field: String },
    /// The accuracy suite would contain no cases.
    EmptyAccuracySuite,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_constructor_sets_severity() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::ZeroCount {
                field: "speed.iterations".to_string(),
            },
            "speed.iterations must be at least 1",
        );
        assert!(issue.is_error());
        assert_eq!(issue.message, "speed.iterations must be at least 1");
    }

    #[test]
    fn warning_is_not_error() {
        let issue = ConfigIssue::warning(ConfigIssueCode::EmptyAccuracySuite, "no cases");
        assert!(!issue.is_error());
        assert_eq!(issue.severity, Severity::Warning);
    }
}
