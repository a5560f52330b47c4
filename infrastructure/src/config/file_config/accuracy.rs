//! Accuracy harness configuration from TOML (`[accuracy]` section)

use primality_domain::{Candidate, CandidateInput, ConfigIssue, ConfigIssueCode, TestCase, Verdict};
use serde::{Deserialize, Serialize};

/// One configured test case
///
/// `candidate` is kept untyped so a bad entry becomes a [`ConfigIssue`]
/// instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTestCase {
    pub candidate: CandidateInput,
    pub expected: Verdict,
}

/// Raw accuracy configuration from TOML
///
/// # Example
///
/// ```toml
/// [accuracy]
/// include_reference = true
/// cases = [
///   { candidate = 23909, expected = true },
///   { candidate = "44532", expected = false },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAccuracyConfig {
    /// Prepend the built-in reference suite
    pub include_reference: bool,
    /// Additional cases
    pub cases: Vec<FileTestCase>,
}

impl Default for FileAccuracyConfig {
    fn default() -> Self {
        Self {
            include_reference: true,
            cases: Vec::new(),
        }
    }
}

impl FileAccuracyConfig {
    /// Convert configured cases, collecting an issue for each candidate
    /// that is not a 64-bit integer.
    pub fn parse_cases(&self) -> (Vec<TestCase>, Vec<ConfigIssue>) {
        let mut cases = Vec::with_capacity(self.cases.len());
        let mut issues = Vec::new();

        for (i, raw) in self.cases.iter().enumerate() {
            match Candidate::try_from(raw.candidate.clone()) {
                Ok(candidate) => cases.push(TestCase::new(candidate, raw.expected)),
                Err(e) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidCandidate {
                        field: format!("accuracy.cases[{}].candidate", i),
                        value: raw.candidate.to_string(),
                    },
                    format!("accuracy.cases[{}]: {}", i, e),
                )),
            }
        }

        (cases, issues)
    }

    /// Full suite: reference cases (if enabled) followed by configured cases.
    pub fn suite(&self) -> (Vec<TestCase>, Vec<ConfigIssue>) {
        let (configured, issues) = self.parse_cases();
        let mut suite = if self.include_reference {
            TestCase::reference_suite()
        } else {
            Vec::new()
        };
        suite.extend(configured);
        (suite, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_parse_cases_mixed_forms() {
        let toml_str = r#"
[accuracy]
cases = [
  { candidate = 23909, expected = true },
  { candidate = "44532", expected = false },
  { candidate = 7.0, expected = true },
]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (cases, issues) = config.accuracy.parse_cases();

        assert!(issues.is_empty());
        assert_eq!(
            cases,
            vec![
                TestCase::prime(23909),
                TestCase::not_prime(44532),
                TestCase::prime(7),
            ]
        );
    }

    #[test]
    fn test_parse_cases_reports_invalid_candidate() {
        let toml_str = r#"
[accuracy]
cases = [
  { candidate = "abc", expected = false },
  { candidate = 3.5, expected = false },
  { candidate = 31091, expected = true },
]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (cases, issues) = config.accuracy.parse_cases();

        assert_eq!(cases, vec![TestCase::prime(31091)]);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::InvalidCandidate {
                field: "accuracy.cases[0].candidate".to_string(),
                value: "\"abc\"".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_cases_rejects_float_beyond_exact_range() {
        let toml_str = r#"
[accuracy]
cases = [
  { candidate = 9007199254740993.0, expected = false },
  { candidate = 9007199254740993, expected = false },
]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (cases, issues) = config.accuracy.parse_cases();

        assert_eq!(cases, vec![TestCase::not_prime(9_007_199_254_740_993)]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].message.starts_with("accuracy.cases[0]: Inexact input"));
    }

    #[test]
    fn test_suite_includes_reference_by_default() {
        let config = FileAccuracyConfig {
            include_reference: true,
            cases: vec![FileTestCase {
                candidate: CandidateInput::Integer(97),
                expected: Verdict::Prime,
            }],
        };
        let (suite, _) = config.suite();
        assert_eq!(suite.len(), TestCase::reference_suite().len() + 1);
        assert_eq!(suite.last(), Some(&TestCase::prime(97)));
    }

    #[test]
    fn test_suite_without_reference() {
        let config = FileAccuracyConfig {
            include_reference: false,
            cases: Vec::new(),
        };
        let (suite, issues) = config.suite();
        assert!(suite.is_empty());
        assert!(issues.is_empty());
    }
}
