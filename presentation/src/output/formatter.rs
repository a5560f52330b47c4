//! Output formatter trait

use primality_domain::{DomainError, OutputFormat, Verdict};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Trait for formatting harness results
pub trait OutputFormatter<T: ?Sized> {
    /// Format every detail of the result
    fn format(&self, result: &T) -> String;

    /// Format totals and anything that needs attention
    fn format_summary(&self, result: &T) -> String;

    /// Format as JSON
    fn format_json(&self, result: &T) -> String;

    /// Dispatch on the selected output format
    fn render(&self, result: &T, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Summary => self.format_summary(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}

/// One evaluated value from `check`.
///
/// Invalid values carry their error instead of a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub input: String,
    pub result: Result<Verdict, DomainError>,
    pub witness: Option<u64>,
}

impl CheckEntry {
    pub fn evaluate(input: &str) -> Self {
        let (result, witness) = match primality_domain::Candidate::parse(input) {
            Ok(candidate) => {
                let (verdict, witness) = candidate.classify();
                (Ok(verdict), witness)
            }
            Err(e) => (Err(e), None),
        };
        Self {
            input: input.to_string(),
            result,
            witness,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for CheckEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckEntry", 3)?;
        state.serialize_field("input", &self.input)?;
        match &self.result {
            Ok(verdict) => {
                state.serialize_field("prime", verdict)?;
                state.serialize_field("witness", &self.witness)?;
            }
            Err(e) => {
                state.serialize_field("error", &e.to_string())?;
                state.skip_field("witness")?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_entry_evaluate() {
        let prime = CheckEntry::evaluate("23909");
        assert_eq!(prime.result, Ok(Verdict::Prime));
        assert_eq!(prime.witness, None);

        let composite = CheckEntry::evaluate("38243");
        assert_eq!(composite.result, Ok(Verdict::NotPrime));
        assert_eq!(composite.witness, Some(167));

        let negative = CheckEntry::evaluate("-7");
        assert_eq!(negative.result, Ok(Verdict::NotPrime));
        assert_eq!(negative.witness, None);
    }

    #[test]
    fn test_check_entry_invalid() {
        let entry = CheckEntry::evaluate("abc");
        assert!(!entry.is_valid());
        assert!(entry.result.unwrap_err().is_invalid_candidate());
    }

    #[test]
    fn test_check_entry_json() {
        let valid = serde_json::to_value(CheckEntry::evaluate("44532")).unwrap();
        assert_eq!(valid["input"], "44532");
        assert_eq!(valid["prime"], false);
        assert_eq!(valid["witness"], 2);

        let invalid = serde_json::to_value(CheckEntry::evaluate("1.5")).unwrap();
        assert!(invalid.get("prime").is_none());
        assert!(invalid["error"].as_str().unwrap().contains("not an integer"));
    }
}
