//! Application-level configuration.
//!
//! - [`HarnessParams`]: iteration, warmup and parallelism control for the harnesses

pub mod harness_params;

pub use harness_params::HarnessParams;
