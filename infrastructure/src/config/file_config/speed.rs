//! Speed harness configuration from TOML (`[speed]` section)

use primality_domain::{Candidate, CandidateInput, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw speed configuration from TOML
///
/// # Example
///
/// ```toml
/// [speed]
/// inputs = [23909, 3484798799]
/// iterations = 10
/// warmup = 1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeedConfig {
    /// Candidates to benchmark, in order
    pub inputs: Vec<CandidateInput>,
    /// Timed evaluations per candidate
    pub iterations: usize,
    /// Untimed evaluations per candidate
    pub warmup: usize,
}

impl Default for FileSpeedConfig {
    fn default() -> Self {
        Self {
            inputs: [23909, 43177, 31091, 44532, 13860, 38243, 3_484_798_799]
                .into_iter()
                .map(CandidateInput::Integer)
                .collect(),
            iterations: 10,
            warmup: 1,
        }
    }
}

impl FileSpeedConfig {
    /// Convert configured inputs, collecting an issue for each invalid one.
    pub fn parse_inputs(&self) -> (Vec<Candidate>, Vec<ConfigIssue>) {
        let mut candidates = Vec::with_capacity(self.inputs.len());
        let mut issues = Vec::new();

        for (i, raw) in self.inputs.iter().enumerate() {
            match Candidate::try_from(raw.clone()) {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidCandidate {
                        field: format!("speed.inputs[{}]", i),
                        value: raw.to_string(),
                    },
                    format!("speed.inputs[{}]: {}", i, e),
                )),
            }
        }

        (candidates, issues)
    }

    pub(crate) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_inputs().1;
        if self.iterations == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroCount {
                    field: "speed.iterations".to_string(),
                },
                "speed.iterations must be at least 1",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        let config = FileSpeedConfig::default();
        let (candidates, issues) = config.parse_inputs();
        assert!(issues.is_empty());
        assert_eq!(candidates.len(), 7);
        assert_eq!(candidates.last().unwrap().value(), 3_484_798_799);
    }

    #[test]
    fn test_invalid_input_reported() {
        let config = FileSpeedConfig {
            inputs: vec![
                CandidateInput::Text("12x".to_string()),
                CandidateInput::Integer(49),
            ],
            ..Default::default()
        };
        let (candidates, issues) = config.parse_inputs();
        assert_eq!(candidates, vec![Candidate::new(49)]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("speed.inputs[0]:"));
    }

    #[test]
    fn test_zero_iterations_is_error() {
        let config = FileSpeedConfig {
            iterations: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroCount {
                field: "speed.iterations".to_string()
            }
        );
    }
}
