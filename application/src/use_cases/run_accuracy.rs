//! Run Accuracy use case
//!
//! Checks oracle verdicts against expected verdicts. Cases are split into
//! batches that run concurrently on the blocking pool; the report keeps the
//! input order regardless of which batch finishes first.

use crate::config::HarnessParams;
use crate::ports::progress::{HarnessKind, NoProgress, ProgressNotifier};
use crate::ports::result_logger::{NoResultLogger, ResultEvent, ResultLogger};
use crate::use_cases::shared::check_cancelled;
use primality_domain::{AccuracyReport, CaseOutcome, DomainError, TestCase};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during an accuracy run
#[derive(Error, Debug)]
pub enum RunAccuracyError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Worker task failed: {0}")]
    WorkerFailed(String),
}

impl RunAccuracyError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunAccuracyError::Domain(e) if e.is_cancelled())
    }
}

/// Input for the RunAccuracy use case
#[derive(Debug, Clone)]
pub struct RunAccuracyInput {
    pub cases: Vec<TestCase>,
    /// Only `parallelism` is used.
    pub params: HarnessParams,
}

impl RunAccuracyInput {
    pub fn new(cases: Vec<TestCase>, params: HarnessParams) -> Self {
        Self { cases, params }
    }
}

/// Use case for running the accuracy harness
#[derive(Clone)]
pub struct RunAccuracyUseCase {
    result_logger: Arc<dyn ResultLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl Default for RunAccuracyUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunAccuracyUseCase {
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
    pub async fn execute(
        &self,
        input: RunAccuracyInput,
    ) -> Result<AccuracyReport, RunAccuracyError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunAccuracyInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<AccuracyReport, RunAccuracyError> {
        if input.cases.is_empty() {
            return Err(DomainError::EmptySuite.into());
        }
        check_cancelled(&self.cancellation_token)?;

        let total = input.cases.len();
        let workers = input.params.parallelism.clamp(1, total);
        let batch_size = total.div_ceil(workers);
        let batch_count = total.div_ceil(batch_size);

        info!(
            "Starting accuracy suite: {} cases in {} batches",
            total, batch_count
        );
        progress.on_suite_start(HarnessKind::Accuracy, total);

        let mut join_set = JoinSet::new();

        for (index, batch) in input.cases.chunks(batch_size).enumerate() {
            let batch = batch.to_vec();
            let token = self.cancellation_token.clone();

            join_set.spawn_blocking(move || {
                let mut outcomes = Vec::with_capacity(batch.len());
                for case in &batch {
                    check_cancelled(&token)?;
                    outcomes.push(case.run());
                }
                Ok::<_, DomainError>((index, outcomes))
            });
        }

        let mut batches: Vec<Option<Vec<CaseOutcome>>> = vec![None; batch_count];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok(Ok((index, outcomes))) => {
                    debug!("Batch {} finished with {} cases", index, outcomes.len());
                    for outcome in &outcomes {
                        progress.on_case_complete(outcome);
                    }
                    batches[index] = Some(outcomes);
                }
                Ok(Err(e)) => {
                    join_set.abort_all();
                    return Err(e.into());
                }
                Err(e) => {
                    warn!("Accuracy worker failed: {}", e);
                    join_set.abort_all();
                    return Err(RunAccuracyError::WorkerFailed(e.to_string()));
                }
            }
        }

        progress.on_suite_complete(HarnessKind::Accuracy);

        let outcomes: Vec<CaseOutcome> = batches.into_iter().flatten().flatten().collect();
        for outcome in &outcomes {
            if !outcome.passed {
                warn!(
                    "Accuracy case failed: {} expected {}, got {}",
                    outcome.case.candidate, outcome.case.expected, outcome.actual
                );
            }
            self.log_case(outcome);
        }

        let report = AccuracyReport::new(outcomes);
        info!(
            "Accuracy suite complete: {}/{} passed",
            report.passed(),
            report.total()
        );

        self.result_logger.log(ResultEvent::new(
            "accuracy_summary",
            serde_json::json!({
                "total": report.total(),
                "passed": report.passed(),
                "failed": report.failed(),
            }),
        ));

        Ok(report)
    }

    fn log_case(&self, outcome: &CaseOutcome) {
        self.result_logger.log(ResultEvent::new(
            "accuracy_case",
            serde_json::json!({
                "candidate": outcome.case.candidate,
                "expected": outcome.case.expected,
                "actual": outcome.actual,
                "passed": outcome.passed,
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primality_domain::Verdict;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ResultLogger for RecordingLogger {
        fn log(&self, event: ResultEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    #[derive(Default)]
    struct CountingProgress {
        started: AtomicUsize,
        cases: AtomicUsize,
        completed: AtomicUsize,
    }

    impl ProgressNotifier for CountingProgress {
        fn on_suite_start(&self, kind: HarnessKind, total: usize) {
            assert_eq!(kind, HarnessKind::Accuracy);
            self.started.store(total, Ordering::SeqCst);
        }

        fn on_case_complete(&self, _outcome: &CaseOutcome) {
            self.cases.fetch_add(1, Ordering::SeqCst);
        }

        fn on_suite_complete(&self, _kind: HarnessKind) {
            self.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn params(parallelism: usize) -> HarnessParams {
        HarnessParams::default().with_parallelism(parallelism)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_reference_suite_passes() {
        let use_case = RunAccuracyUseCase::new();
        let input = RunAccuracyInput::new(TestCase::reference_suite(), params(4));

        let report = use_case.execute(input).await.unwrap();

        assert_eq!(report.total(), TestCase::reference_suite().len());
        assert!(report.all_passed());
    }

    #[tokio::test]
    async fn test_preserves_input_order_across_batches() {
        let cases: Vec<TestCase> = (0..200)
            .map(|n| TestCase::new(n, primality_domain::is_prime(n)))
            .collect();
        let use_case = RunAccuracyUseCase::new();

        let report = use_case
            .execute(RunAccuracyInput::new(cases.clone(), params(7)))
            .await
            .unwrap();

        let order: Vec<i64> = report
            .outcomes
            .iter()
            .map(|o| o.case.candidate.value())
            .collect();
        assert_eq!(order, (0..200).collect::<Vec<_>>());
        assert!(report.all_passed());
    }

    #[tokio::test]
    async fn test_reports_failing_case() {
        let cases = vec![TestCase::prime(23909), TestCase::prime(49)];
        let use_case = RunAccuracyUseCase::new();

        let report = use_case
            .execute(RunAccuracyInput::new(cases, params(1)))
            .await
            .unwrap();

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        let failure = report.failures().next().unwrap();
        assert_eq!(failure.case.candidate.value(), 49);
        assert_eq!(failure.actual, Verdict::NotPrime);
    }

    #[tokio::test]
    async fn test_empty_suite_is_error() {
        let use_case = RunAccuracyUseCase::new();
        let result = use_case
            .execute(RunAccuracyInput::new(vec![], params(2)))
            .await;
        assert!(matches!(
            result,
            Err(RunAccuracyError::Domain(DomainError::EmptySuite))
        ));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let use_case = RunAccuracyUseCase::new().with_cancellation(token);

        let result = use_case
            .execute(RunAccuracyInput::new(TestCase::reference_suite(), params(2)))
            .await;

        assert!(result.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_progress_callbacks() {
        let progress = CountingProgress::default();
        let use_case = RunAccuracyUseCase::new();

        use_case
            .execute_with_progress(
                RunAccuracyInput::new(TestCase::reference_suite(), params(3)),
                &progress,
            )
            .await
            .unwrap();

        let total = TestCase::reference_suite().len();
        assert_eq!(progress.started.load(Ordering::SeqCst), total);
        assert_eq!(progress.cases.load(Ordering::SeqCst), total);
        assert_eq!(progress.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_logs_cases_and_summary() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = RunAccuracyUseCase::new().with_result_logger(logger.clone());

        use_case
            .execute(RunAccuracyInput::new(
                vec![TestCase::prime(31091), TestCase::not_prime(38243)],
                params(2),
            ))
            .await
            .unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].0, "accuracy_case");
        assert_eq!(events[0].1["candidate"], 31091);
        assert_eq!(events[0].1["passed"], true);
        assert_eq!(events[1].1["candidate"], 38243);
        assert_eq!(events[1].1["actual"], false);
        assert_eq!(events[2].0, "accuracy_summary");
        assert_eq!(events[2].1["passed"], 2);
    }
}
