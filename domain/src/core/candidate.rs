//! Candidate value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// An integer under primality evaluation (Value Object)
///
/// Any `i64` is a legal candidate, including zero and negative values,
/// which are simply never prime. Construction from untyped input goes
/// through [`Candidate::parse`] or `TryFrom<CandidateInput>`, which are the
/// only places an [`DomainError::InvalidInput`] can arise.
///
/// # Example
///
/// ```
/// use primality_domain::{Candidate, DomainError};
///
/// let c = Candidate::parse(" 23909 ").unwrap();
/// assert_eq!(c.value(), 23909);
///
/// assert!(matches!(Candidate::parse("3.5"), Err(DomainError::InvalidInput(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CandidateInput", into = "i64")]
pub struct Candidate(i64);

impl Candidate {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Parse a candidate from text, accepting an optional sign and
    /// surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Ok(Self(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(DomainError::OutOfRange(trimmed.to_string()))
                }
                _ => Err(DomainError::InvalidInput(format!("{:?}", text))),
            },
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Candidate {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Candidate> for i64 {
    fn from(c: Candidate) -> Self {
        c.0
    }
}

impl std::str::FromStr for Candidate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// 2^53 as f64. From here on neighbouring integers share a float, so
// 2^53 itself may already be a rounded 2^53 + 1.
const EXACT_FLOAT_BOUND: f64 = 9_007_199_254_740_992.0;

impl TryFrom<f64> for Candidate {
    type Error = DomainError;

    /// Integral floats below 2^53 in magnitude are accepted; fractional,
    /// non-finite and larger values are not.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DomainError::InvalidInput(value.to_string()));
        }
        if value.abs() >= EXACT_FLOAT_BOUND {
            return Err(DomainError::InexactFloat(value.to_string()));
        }
        Ok(Self(value as i64))
    }
}

/// Untyped candidate input as it arrives from configuration or other
/// loosely typed sources.
///
/// TOML and JSON can carry a candidate as an integer, a float or a string;
/// all three deserialize into this enum and are validated on conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for CandidateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateInput::Integer(v) => write!(f, "{}", v),
            CandidateInput::Float(v) => write!(f, "{}", v),
            CandidateInput::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl TryFrom<CandidateInput> for Candidate {
    type Error = DomainError;

    fn try_from(input: CandidateInput) -> Result<Self, Self::Error> {
        match input {
            CandidateInput::Integer(v) => Ok(Self(v)),
            CandidateInput::Float(v) => Self::try_from(v),
            CandidateInput::Text(s) => Self::parse(&s),
        }
    }
}

impl From<Candidate> for CandidateInput {
    fn from(c: Candidate) -> Self {
        CandidateInput::Integer(c.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_signed() {
        assert_eq!(Candidate::parse("23909").unwrap().value(), 23909);
        assert_eq!(Candidate::parse("-5").unwrap().value(), -5);
        assert_eq!(Candidate::parse("+7").unwrap().value(), 7);
        assert_eq!(Candidate::parse("  49\n").unwrap().value(), 49);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for text in ["", "abc", "3.5", "1e3", "12a", "--3"] {
            let err = Candidate::parse(text).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidInput(_)),
                "expected InvalidInput for {:?}, got {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = Candidate::parse("99999999999999999999").unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfRange("99999999999999999999".to_string())
        );
        assert!(matches!(
            Candidate::parse("-99999999999999999999"),
            Err(DomainError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_large_value_is_exact() {
        let c: Candidate = "3484798799".parse().unwrap();
        assert_eq!(c.value(), 3_484_798_799);
    }

    #[test]
    fn test_try_from_float() {
        assert_eq!(Candidate::try_from(7.0).unwrap().value(), 7);
        assert!(matches!(
            Candidate::try_from(3.5),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            Candidate::try_from(f64::NAN),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            Candidate::try_from(f64::INFINITY),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            Candidate::try_from(1e30),
            Err(DomainError::InexactFloat(_))
        ));
    }

    #[test]
    fn test_try_from_float_near_exact_bound() {
        assert_eq!(
            Candidate::try_from(9_007_199_254_740_991.0).unwrap().value(),
            9_007_199_254_740_991
        );
        assert_eq!(
            Candidate::try_from(-9_007_199_254_740_991.0).unwrap().value(),
            -9_007_199_254_740_991
        );
        // 2^53 + 1 has no f64 of its own and arrives as 2^53
        assert!(matches!(
            Candidate::try_from(9_007_199_254_740_993.0_f64),
            Err(DomainError::InexactFloat(_))
        ));
        assert!(matches!(
            Candidate::try_from(-9_007_199_254_740_992.0),
            Err(DomainError::InexactFloat(_))
        ));
    }

    #[test]
    fn test_large_integer_input_is_exact() {
        let c = Candidate::try_from(CandidateInput::Integer(9_007_199_254_740_993)).unwrap();
        assert_eq!(c.value(), 9_007_199_254_740_993);
    }

    #[test]
    fn test_deserialize_from_integer_and_string() {
        let c: Candidate = serde_json::from_str("43177").unwrap();
        assert_eq!(c.value(), 43177);

        let c: Candidate = serde_json::from_str("\"31091\"").unwrap();
        assert_eq!(c.value(), 31091);
    }

    #[test]
    fn test_deserialize_rejects_fractional() {
        let result: Result<Candidate, _> = serde_json::from_str("2.5");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_as_integer() {
        let json = serde_json::to_string(&Candidate::new(49)).unwrap();
        assert_eq!(json, "49");
    }

    #[test]
    fn test_candidate_input_display() {
        assert_eq!(CandidateInput::Integer(5).to_string(), "5");
        assert_eq!(CandidateInput::Text("x".to_string()).to_string(), "\"x\"");
    }
}
