//! Accuracy checking against known verdicts

use crate::core::candidate::Candidate;
use crate::core::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// A candidate paired with its expected verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub candidate: Candidate,
    pub expected: Verdict,
}

impl TestCase {
    pub fn new(candidate: impl Into<Candidate>, expected: impl Into<Verdict>) -> Self {
        Self {
            candidate: candidate.into(),
            expected: expected.into(),
        }
    }

    pub fn prime(candidate: i64) -> Self {
        Self::new(candidate, Verdict::Prime)
    }

    pub fn not_prime(candidate: i64) -> Self {
        Self::new(candidate, Verdict::NotPrime)
    }

    /// Built-in known-value cases.
    ///
    /// Covers six known values, the small-value
    /// boundaries, a perfect square whose divisor sits exactly on the
    /// square-root bound, and a value above 2^31.
    pub fn reference_suite() -> Vec<TestCase> {
        vec![
            TestCase::prime(23909),
            TestCase::prime(43177),
            TestCase::prime(31091),
            TestCase::not_prime(44532),
            TestCase::not_prime(13860),
            TestCase::not_prime(38243),
            TestCase::prime(2),
            TestCase::not_prime(1),
            TestCase::not_prime(0),
            TestCase::not_prime(-5),
            TestCase::not_prime(49),
            TestCase::prime(3_484_798_799),
        ]
    }
}

/// Result of checking one [`TestCase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub case: TestCase,
    pub actual: Verdict,
    pub passed: bool,
}

/// Evaluate `candidate` and compare against `expected`.
pub fn accuracy_test(candidate: Candidate, expected: Verdict) -> CaseOutcome {
    let actual = candidate.verdict();
    CaseOutcome {
        case: TestCase {
            candidate,
            expected,
        },
        actual,
        passed: actual == expected,
    }
}

impl TestCase {
    pub fn run(&self) -> CaseOutcome {
        accuracy_test(self.candidate, self.expected)
    }
}

/// Aggregated accuracy outcomes, in the order the cases were given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl AccuracyReport {
    pub fn new(outcomes: Vec<CaseOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}
