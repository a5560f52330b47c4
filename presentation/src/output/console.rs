//! Console output formatter for harness results

use crate::output::formatter::{CheckEntry, OutputFormatter};
use colored::Colorize;
use primality_domain::{AccuracyReport, CaseOutcome, SpeedSample, Verdict};

/// Formats harness results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn verdict_label(verdict: Verdict) -> String {
        match verdict {
            Verdict::Prime => verdict.as_str().green().to_string(),
            Verdict::NotPrime => verdict.as_str().yellow().to_string(),
        }
    }

    fn outcome_line(outcome: &CaseOutcome) -> String {
        let mark = if outcome.passed {
            "v".green()
        } else {
            "x".red()
        };
        format!(
            "  {} {:>20}  expected {:<9}  got {}\n",
            mark,
            outcome.case.candidate,
            outcome.case.expected.as_str(),
            Self::verdict_label(outcome.actual)
        )
    }

    fn totals_line(report: &AccuracyReport) -> String {
        let totals = format!(
            "{}/{} passed, {} failed",
            report.passed(),
            report.total(),
            report.failed()
        );
        if report.all_passed() {
            format!("{} {}\n", "PASS".green().bold(), totals)
        } else {
            format!("{} {}\n", "FAIL".red().bold(), totals)
        }
    }

    fn sample_row(sample: &SpeedSample) -> String {
        match sample.summary() {
            Some(s) => format!(
                "  {:>20}  {:<9}  {:>12.2?} {:>12.2?} {:>12.2?} {:>12.2?}\n",
                sample.candidate,
                sample.verdict.as_str(),
                s.median,
                s.mean,
                s.min,
                s.max
            ),
            None => format!(
                "  {:>20}  {:<9}  {}\n",
                sample.candidate,
                sample.verdict.as_str(),
                "no timings".dimmed()
            ),
        }
    }

    fn check_line(entry: &CheckEntry) -> String {
        match (&entry.result, entry.witness) {
            (Ok(verdict), Some(divisor)) => format!(
                "{}: {} (divisible by {})\n",
                entry.input,
                Self::verdict_label(*verdict),
                divisor
            ),
            (Ok(verdict), None) => {
                format!("{}: {}\n", entry.input, Self::verdict_label(*verdict))
            }
            (Err(e), _) => format!("{}: {}\n", entry.input, e.to_string().red()),
        }
    }
}

impl OutputFormatter<AccuracyReport> for ConsoleFormatter {
    fn format(&self, report: &AccuracyReport) -> String {
        let mut output = Self::header("Accuracy Results");

        output.push_str(&Self::section_header("Cases"));
        for outcome in &report.outcomes {
            output.push_str(&Self::outcome_line(outcome));
        }

        output.push('\n');
        output.push_str(&Self::totals_line(report));
        output.push_str(&Self::footer());
        output
    }

    fn format_summary(&self, report: &AccuracyReport) -> String {
        let mut output = Self::totals_line(report);
        for outcome in report.failures() {
            output.push_str(&Self::outcome_line(outcome));
        }
        output
    }

    fn format_json(&self, report: &AccuracyReport) -> String {
        serde_json::to_string_pretty(&serde_json::json!({
            "total": report.total(),
            "passed": report.passed(),
            "failed": report.failed(),
            "outcomes": report.outcomes,
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter<[SpeedSample]> for ConsoleFormatter {
    fn format(&self, samples: &[SpeedSample]) -> String {
        let mut output = Self::header("Speed Results");

        output.push_str(&Self::section_header("Timings"));
        output.push_str(&format!(
            "  {:>20}  {:<9}  {:>12} {:>12} {:>12} {:>12}\n",
            "value", "verdict", "median", "mean", "min", "max"
        ));
        for sample in samples {
            output.push_str(&Self::sample_row(sample));
        }

        if let Some(iterations) = samples.first().map(SpeedSample::iterations) {
            output.push_str(&format!(
                "\n{} {} per value\n",
                "Iterations:".dimmed(),
                iterations
            ));
        }
        output.push_str(&Self::footer());
        output
    }

    fn format_summary(&self, samples: &[SpeedSample]) -> String {
        samples
            .iter()
            .map(|sample| match sample.summary() {
                Some(s) => format!(
                    "{}: {} median {:.2?} over {} iterations\n",
                    sample.candidate,
                    Self::verdict_label(sample.verdict),
                    s.median,
                    sample.iterations()
                ),
                None => format!("{}: no timings\n", sample.candidate),
            })
            .collect()
    }

    fn format_json(&self, samples: &[SpeedSample]) -> String {
        let values: Vec<_> = samples
            .iter()
            .map(|sample| {
                let durations: Vec<u64> = sample
                    .durations
                    .iter()
                    .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
                    .collect();
                serde_json::json!({
                    "candidate": sample.candidate,
                    "prime": sample.verdict,
                    "iterations": sample.iterations(),
                    "summary_ns": sample.summary(),
                    "durations_ns": durations,
                })
            })
            .collect();
        serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".to_string())
    }
}

impl OutputFormatter<[CheckEntry]> for ConsoleFormatter {
    fn format(&self, entries: &[CheckEntry]) -> String {
        entries.iter().map(Self::check_line).collect()
    }

    fn format_summary(&self, entries: &[CheckEntry]) -> String {
        self.format(entries)
    }

    fn format_json(&self, entries: &[CheckEntry]) -> String {
        serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
    }
}
