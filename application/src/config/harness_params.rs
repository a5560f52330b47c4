//! Harness parameters: use case loop control.
//!
//! [`HarnessParams`] groups the static parameters that control how the
//! accuracy and speed use cases run. These are application-layer concerns,
//! not domain policy.

use serde::{Deserialize, Serialize};

/// Harness loop control parameters.
///
/// | Field         | Accuracy | Speed |
/// |---------------|----------|-------|
/// | `iterations`  | No       | Yes   |
/// | `warmup`      | No       | Yes   |
/// | `parallelism` | Yes      | No    |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessParams {
    /// Timed evaluations per candidate.
    pub iterations: usize,
    /// Untimed evaluations per candidate before timing starts.
    pub warmup: usize,
    /// Number of concurrent accuracy batches.
    pub parallelism: usize,
}

impl Default for HarnessParams {
    fn default() -> Self {
        Self {
            iterations: 10,
            warmup: 1,
            parallelism: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl HarnessParams {
    // ==================== Builder Methods ====================

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Zero is treated as one.
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }
}
