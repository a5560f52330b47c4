//! Domain layer for primality
//!
//! This crate contains the primality oracle, its value objects and the
//! harness primitives. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Oracle
//!
//! [`is_prime`] decides primality by trial division up to the integer
//! square root of the candidate, stopping at the first divisor.
//!
//! ## Invalid input
//!
//! A [`Candidate`] is always an integer. Untyped input (text, TOML floats)
//! is converted with [`Candidate::parse`] or `TryFrom<CandidateInput>`, and
//! anything that is not an integer becomes [`DomainError::InvalidInput`]
//! rather than a [`Verdict::NotPrime`].
//!
//! ## Harness
//!
//! - **Accuracy**: [`TestCase`] → [`CaseOutcome`] → [`AccuracyReport`]
//! - **Speed**: [`speed_test`] → [`SpeedSample`] → [`TimingSummary`]

pub mod config;
pub mod core;
pub mod primality;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    candidate::{Candidate, CandidateInput},
    error::DomainError,
    verdict::Verdict,
};
pub use primality::{
    AccuracyReport, CaseOutcome, SpeedSample, TestCase, TimingSummary, accuracy_test, evaluate,
    is_prime, smallest_divisor, speed_test,
};
