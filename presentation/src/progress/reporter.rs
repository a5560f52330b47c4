//! Progress reporting for harness runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use primality_application::{HarnessKind, ProgressNotifier};
use primality_domain::{CaseOutcome, SpeedSample};
use std::sync::Mutex;

/// Reports progress with an indicatif bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn display_name(kind: HarnessKind) -> &'static str {
        match kind {
            HarnessKind::Accuracy => "Accuracy",
            HarnessKind::Speed => "Speed",
        }
    }

    fn advance(&self, message: String) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(message);
            pb.inc(1);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_suite_start(&self, kind: HarnessKind, total: usize) {
        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        pb.set_style(Self::bar_style());
        pb.set_prefix(Self::display_name(kind));
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_case_complete(&self, outcome: &CaseOutcome) {
        let status = if outcome.passed {
            format!("{} {}", "v".green(), outcome.case.candidate)
        } else {
            format!("{} {}", "x".red(), outcome.case.candidate)
        };
        self.advance(status);
    }

    fn on_sample_complete(&self, sample: &SpeedSample) {
        self.advance(sample.candidate.to_string());
    }

    fn on_suite_complete(&self, kind: HarnessKind) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!("{} complete!", Self::display_name(kind).green()));
        }
    }
}

/// Simple line-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_suite_start(&self, kind: HarnessKind, total: usize) {
        eprintln!(
            "{} {} ({} values)",
            "->".cyan(),
            ProgressReporter::display_name(kind).bold(),
            total
        );
    }

    fn on_case_complete(&self, outcome: &CaseOutcome) {
        if outcome.passed {
            eprintln!("  {} {}", "v".green(), outcome.case.candidate);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), outcome.case.candidate);
        }
    }

    fn on_sample_complete(&self, sample: &SpeedSample) {
        eprintln!(
            "  {} {} ({} iterations)",
            "v".green(),
            sample.candidate,
            sample.iterations()
        );
    }

    fn on_suite_complete(&self, _kind: HarnessKind) {
        eprintln!();
    }
}
