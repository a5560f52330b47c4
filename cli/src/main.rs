//! CLI entrypoint for primality
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use primality_application::{
    NoProgress, NoResultLogger, ProgressNotifier, ResultLogger, RunAccuracyInput,
    RunAccuracyUseCase, RunSpeedInput, RunSpeedUseCase,
};
use primality_domain::{Candidate, OutputFormat};
use primality_infrastructure::{ConfigLoader, ConfigUsage, FileConfig, JsonlResultLogger};
use primality_presentation::{
    CheckEntry, Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter, RunStatus,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| config.logging.log_dir.as_ref().map(PathBuf::from));
    let _log_guard = init_logging(cli.verbose, log_dir.as_deref());

    info!("Starting primality");

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(RunStatus::Usage.into());
    };

    report_config_issues(&config, config_usage(&command))?;

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let result_logger = build_result_logger(cli.results_file.as_ref(), &config);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let status = match command {
        // No Ctrl-C handler here: the default SIGINT exit stays in place.
        Command::Check { values } => {
            let entries: Vec<CheckEntry> =
                values.iter().map(|v| CheckEntry::evaluate(v)).collect();
            println!("{}", ConsoleFormatter.render(&entries[..], format).trim_end());
            RunStatus::for_check(&entries)
        }

        Command::Accuracy {
            cases,
            no_reference,
            parallelism,
        } => {
            let (mut suite, _) = if no_reference {
                config.accuracy.parse_cases()
            } else {
                config.accuracy.suite()
            };
            suite.extend(cases);

            let mut params = config.harness_params();
            if let Some(parallelism) = parallelism {
                params = params.with_parallelism(parallelism);
            }

            let use_case = RunAccuracyUseCase::new()
                .with_result_logger(result_logger)
                .with_cancellation(install_ctrl_c_handler());

            let result = use_case
                .execute_with_progress(RunAccuracyInput::new(suite, params), progress.as_ref())
                .await;
            let status = RunStatus::for_accuracy(&result);
            match result {
                Ok(report) => println!("{}", ConsoleFormatter.render(&report, format)),
                Err(e) if e.is_cancelled() => eprintln!("Accuracy run cancelled"),
                Err(e) => return Err(e.into()),
            }
            status
        }

        Command::Speed {
            values,
            iterations,
            warmup,
        } => {
            let candidates: Vec<Candidate> = if values.is_empty() {
                config.speed.parse_inputs().0
            } else {
                values
            };

            let mut params = config.harness_params();
            if let Some(iterations) = iterations {
                params = params.with_iterations(iterations);
            }
            if let Some(warmup) = warmup {
                params = params.with_warmup(warmup);
            }

            let use_case = RunSpeedUseCase::new()
                .with_result_logger(result_logger)
                .with_cancellation(install_ctrl_c_handler());

            let result = use_case
                .execute_with_progress(RunSpeedInput::new(candidates, params), progress.as_ref())
                .await;
            let status = RunStatus::for_speed(&result);
            match result {
                Ok(samples) => println!("{}", ConsoleFormatter.render(&samples[..], format)),
                Err(e) if e.is_cancelled() => eprintln!("Speed run cancelled"),
                Err(e) => return Err(e.into()),
            }
            status
        }
    };

    Ok(status.into())
}

/// Config values the command reads after its CLI overrides are applied.
fn config_usage(command: &Command) -> ConfigUsage {
    match command {
        Command::Check { .. } => ConfigUsage::default(),
        Command::Accuracy { parallelism, .. } => ConfigUsage {
            accuracy_cases: true,
            parallelism: parallelism.is_none(),
            ..Default::default()
        },
        Command::Speed {
            values, iterations, ..
        } => ConfigUsage {
            speed_inputs: values.is_empty(),
            speed_iterations: iterations.is_none(),
            ..Default::default()
        },
    }
}

/// Cancel the harness on the first Ctrl-C and exit on the second.
///
/// Harnesses notice cancellation between evaluations, so a single
/// evaluation of a large prime can delay the first Ctrl-C.
fn install_ctrl_c_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let cancellation = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl-C, cancelling run (press again to exit now)");
            cancellation.cancel();
            if tokio::signal::ctrl_c().await.is_ok() {
                std::process::exit(i32::from(RunStatus::Interrupted.code()));
            }
        }
    });
    token
}

/// Initialize tracing: stderr always, plus a log file when a directory is set.
///
/// The returned guard must stay alive for the file writer to flush.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = || match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "primality.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Print config issues to stderr and stop on any error-severity issue.
fn report_config_issues(config: &FileConfig, usage: ConfigUsage) -> Result<()> {
    let issues = config.validate_for(usage);
    for issue in &issues {
        if issue.is_error() {
            eprintln!("Config error: {}", issue.message);
        } else {
            eprintln!("Config warning: {}", issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

/// JSONL result logger from `--results-file` or `[logging] results_file`.
fn build_result_logger(cli_path: Option<&PathBuf>, config: &FileConfig) -> Arc<dyn ResultLogger> {
    let path = cli_path
        .cloned()
        .or_else(|| config.logging.results_file.as_ref().map(PathBuf::from));

    match path.and_then(JsonlResultLogger::new) {
        Some(logger) => {
            info!("Appending results to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoResultLogger),
    }
}
