//! Verdict value object

use serde::{Deserialize, Serialize};

/// Primality result for a candidate
///
/// Serializes as a plain boolean so configuration and JSON output can
/// write `expected = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Verdict {
    Prime,
    NotPrime,
}

impl Verdict {
    pub fn is_prime(&self) -> bool {
        matches!(self, Verdict::Prime)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Prime => "prime",
            Verdict::NotPrime => "not prime",
        }
    }
}

impl From<bool> for Verdict {
    fn from(prime: bool) -> Self {
        if prime { Verdict::Prime } else { Verdict::NotPrime }
    }
}

impl From<Verdict> for bool {
    fn from(v: Verdict) -> Self {
        v.is_prime()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "prime" | "yes" => Ok(Verdict::Prime),
            "false" | "not-prime" | "composite" | "no" => Ok(Verdict::NotPrime),
            other => Err(format!(
                "invalid verdict '{}' (expected true/false, prime/composite)",
                other
            )),
        }
    }
}
