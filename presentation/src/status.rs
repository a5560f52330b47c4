//! Process exit status for each command

use crate::output::formatter::CheckEntry;
use primality_application::{RunAccuracyError, RunSpeedError};
use primality_domain::{AccuracyReport, SpeedSample};
use std::process::ExitCode;

/// Outcome of a command, mapped to a process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit 0
    Success,
    /// Exit 1: an invalid value, a failed case or a harness error
    Failure,
    /// Exit 2: nothing to run
    Usage,
    /// Exit 130: cancelled by Ctrl-C
    Interrupted,
}

impl RunStatus {
    pub fn code(&self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
            RunStatus::Usage => 2,
            RunStatus::Interrupted => 130,
        }
    }

    /// `Failure` if any value was not a valid integer.
    pub fn for_check(entries: &[CheckEntry]) -> Self {
        if entries.iter().all(CheckEntry::is_valid) {
            RunStatus::Success
        } else {
            RunStatus::Failure
        }
    }

    /// `Failure` if any case failed; `Interrupted` if the run was cancelled.
    pub fn for_accuracy(result: &Result<AccuracyReport, RunAccuracyError>) -> Self {
        match result {
            Ok(report) if report.all_passed() => RunStatus::Success,
            Ok(_) => RunStatus::Failure,
            Err(e) if e.is_cancelled() => RunStatus::Interrupted,
            Err(_) => RunStatus::Failure,
        }
    }

    /// `Interrupted` if the run was cancelled.
    pub fn for_speed(result: &Result<Vec<SpeedSample>, RunSpeedError>) -> Self {
        match result {
            Ok(_) => RunStatus::Success,
            Err(e) if e.is_cancelled() => RunStatus::Interrupted,
            Err(_) => RunStatus::Failure,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}
