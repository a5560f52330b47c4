//! Core domain concepts shared across all subdomains.
//!
//! - [`candidate::Candidate`]: an integer under primality evaluation
//! - [`verdict::Verdict`]: the primality result for a candidate
//! - [`error::DomainError`]: domain-level errors

pub mod candidate;
pub mod error;
pub mod verdict;
