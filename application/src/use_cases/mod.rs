//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_accuracy;
pub mod run_speed;
pub(crate) mod shared;
