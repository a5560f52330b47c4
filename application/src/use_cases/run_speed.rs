//! Run Speed use case
//!
//! Times the oracle for each candidate over several iterations. Candidates
//! are measured one after another, never concurrently, so timings do not
//! compete for cores. Each candidate's loop runs on the blocking pool to
//! keep the async runtime responsive to cancellation.
//!
//! Cancellation is checked before every timed iteration. An evaluation
//! already in progress runs to completion, which for a prime near 2^63
//! takes tens of seconds.

use crate::config::HarnessParams;
use crate::ports::progress::{HarnessKind, NoProgress, ProgressNotifier};
use crate::ports::result_logger::{NoResultLogger, ResultEvent, ResultLogger};
use crate::use_cases::shared::check_cancelled;
use primality_domain::{Candidate, DomainError, SpeedSample, speed_test};
use std::hint::black_box;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can occur during a speed run
#[derive(Error, Debug)]
pub enum RunSpeedError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Worker task failed: {0}")]
    WorkerFailed(String),
}

impl RunSpeedError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunSpeedError::Domain(e) if e.is_cancelled())
    }
}

/// Input for the RunSpeed use case
#[derive(Debug, Clone)]
pub struct RunSpeedInput {
    /// Candidates, benchmarked in this order.
    pub candidates: Vec<Candidate>,
    /// `iterations` and `warmup` are used.
    pub params: HarnessParams,
}

impl RunSpeedInput {
    pub fn new(candidates: Vec<Candidate>, params: HarnessParams) -> Self {
        Self { candidates, params }
    }
}

/// Use case for running the speed harness
#[derive(Clone)]
pub struct RunSpeedUseCase {
    result_logger: Arc<dyn ResultLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl Default for RunSpeedUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSpeedUseCase {
    pub fn new() -> Self {
        Self {
            result_logger: Arc::new(NoResultLogger),
            cancellation_token: None,
        }
    }

    /// Create with a result logger.
    pub fn with_result_logger(mut self, logger: Arc<dyn ResultLogger>) -> Self {
        self.result_logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunSpeedInput) -> Result<Vec<SpeedSample>, RunSpeedError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSpeedInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<SpeedSample>, RunSpeedError> {
        let HarnessParams {
            iterations, warmup, ..
        } = input.params;

        if iterations == 0 {
            return Err(DomainError::InvalidIterations.into());
        }
        if input.candidates.is_empty() {
            return Err(DomainError::EmptySuite.into());
        }

        info!(
            "Starting speed suite: {} candidates, {} iterations, {} warmup",
            input.candidates.len(),
            iterations,
            warmup
        );
        progress.on_suite_start(HarnessKind::Speed, input.candidates.len());

        let mut samples = Vec::with_capacity(input.candidates.len());

        for candidate in input.candidates {
            check_cancelled(&self.cancellation_token)?;

            let token = self.cancellation_token.clone();
            let sample = tokio::task::spawn_blocking(move || {
                measure(candidate, warmup, iterations, &token)
            })
            .await
            .map_err(|e| RunSpeedError::WorkerFailed(e.to_string()))??;

            if let Some(summary) = sample.summary() {
                debug!(
                    "is_prime({}) median {:?} over {} iterations",
                    candidate, summary.median, iterations
                );
            }

            progress.on_sample_complete(&sample);
            self.log_sample(&sample);
            samples.push(sample);
        }

        progress.on_suite_complete(HarnessKind::Speed);
        info!("Speed suite complete: {} samples", samples.len());

        Ok(samples)
    }

    fn log_sample(&self, sample: &SpeedSample) {
        self.result_logger.log(ResultEvent::new(
            "speed_sample",
            serde_json::json!({
                "candidate": sample.candidate,
                "verdict": sample.verdict,
                "iterations": sample.iterations(),
                "summary": sample.summary(),
            }),
        ));
    }
}

fn measure(
    candidate: Candidate,
    warmup: usize,
    iterations: usize,
    token: &Option<CancellationToken>,
) -> Result<SpeedSample, DomainError> {
    for _ in 0..warmup {
        black_box(black_box(candidate).verdict());
    }

    let mut durations = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        check_cancelled(token)?;
        durations.push(speed_test(candidate));
    }

    Ok(SpeedSample::new(candidate, candidate.verdict(), durations))
}
