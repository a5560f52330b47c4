//! Trial division with a square-root bound.
//!
//! Any factor of `n` above `isqrt(n)` pairs with one below it, so only
//! divisors in `2..=isqrt(n)` need testing. The bound is an exact integer
//! square root; a float `sqrt` could round a perfect square's root down and
//! skip the divisor sitting on the bound.

use crate::core::candidate::Candidate;
use crate::core::error::DomainError;
use crate::core::verdict::Verdict;

/// Smallest divisor of `n` in `2..=isqrt(n)`, if any.
///
/// Returns `None` for `n < 2` as well as for primes; callers that need to
/// tell those apart should check the lower bound first.
pub fn smallest_divisor(n: i64) -> Option<u64> {
    if n < 2 {
        return None;
    }
    let n = n as u64;
    let limit = n.isqrt();
    (2..=limit).find(|d| n % d == 0)
}

/// Decide whether `n` is prime.
///
/// Values below 2 are never prime. Otherwise the scan stops at the first
/// divisor found.
///
/// ```
/// use primality_domain::is_prime;
///
/// assert!(is_prime(23909));
/// assert!(!is_prime(49));
/// assert!(!is_prime(-5));
/// ```
pub fn is_prime(n: i64) -> bool {
    n >= 2 && smallest_divisor(n).is_none()
}

impl Candidate {
    /// Evaluate this candidate.
    pub fn verdict(&self) -> Verdict {
        Verdict::from(is_prime(self.value()))
    }

    /// Smallest non-trivial divisor, for composite candidates.
    pub fn witness(&self) -> Option<u64> {
        smallest_divisor(self.value())
    }

    /// Verdict and witness from a single scan.
    pub fn classify(&self) -> (Verdict, Option<u64>) {
        let witness = self.witness();
        let verdict = Verdict::from(self.value() >= 2 && witness.is_none());
        (verdict, witness)
    }
}

/// Parse `text` and evaluate it, keeping invalid input distinct from a
/// [`Verdict::NotPrime`] result.
pub fn evaluate(text: &str) -> Result<Verdict, DomainError> {
    Candidate::parse(text).map(|c| c.verdict())
}
