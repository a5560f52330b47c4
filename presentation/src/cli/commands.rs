//! CLI command definitions

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use primality_domain::{Candidate, TestCase, Verdict};
use std::path::PathBuf;

/// Output format for harness results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Totals plus failing cases only
    Summary,
    /// Every case and every timing column
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for primality_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => primality_domain::OutputFormat::Summary,
            OutputFormat::Full => primality_domain::OutputFormat::Full,
            OutputFormat::Json => primality_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for primality
#[derive(Parser, Debug)]
#[command(name = "primality")]
#[command(author, version, about = "Trial-division primality oracle with accuracy and speed harnesses")]
#[command(long_about = r#"
Decides primality by trial division up to the integer square root, and
checks the oracle with two harnesses:

1. accuracy: compare verdicts against expected values
2. speed:    time each input over several iterations (median/mean/min/max)

Configuration files are loaded from (in priority order):
1. PRIMALITY_<SECTION>__<KEY>   Environment variables
2. --config <path>              Explicit config file
3. ./primality.toml             Project-level config
4. ~/.config/primality/config.toml   Global config

Example:
  primality check 23909 44532 -5
  primality accuracy --case 97=true --case 91=false
  primality speed 3484798799 -n 50
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append JSONL result records to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub results_file: Option<PathBuf>,

    /// Also write diagnostic logs to this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate values and print a verdict for each
    Check {
        /// Values to evaluate; invalid ones are reported, not judged
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Compare oracle verdicts against expected verdicts
    Accuracy {
        /// Extra case, e.g. `97=true` or `91=composite` (repeatable)
        #[arg(
            long = "case",
            value_name = "VALUE=EXPECTED",
            value_parser = parse_case_arg,
            allow_hyphen_values = true
        )]
        cases: Vec<TestCase>,

        /// Skip the built-in reference suite
        #[arg(long)]
        no_reference: bool,

        /// Concurrent batches (overrides [harness] parallelism)
        #[arg(short = 'j', long, value_name = "N", value_parser = at_least_one())]
        parallelism: Option<usize>,
    },

    /// Time the oracle over repeated iterations
    Speed {
        /// Values to time (defaults to [speed] inputs)
        #[arg(allow_negative_numbers = true)]
        values: Vec<Candidate>,

        /// Timed iterations per value (overrides [speed] iterations)
        #[arg(short = 'n', long, value_name = "COUNT", value_parser = at_least_one())]
        iterations: Option<usize>,

        /// Untimed iterations per value (overrides [speed] warmup)
        #[arg(long, value_name = "COUNT")]
        warmup: Option<usize>,
    },
}

/// Counts that must be positive, matching the config validation.
fn at_least_one() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

/// Parse a `VALUE=EXPECTED` accuracy case.
pub fn parse_case_arg(arg: &str) -> Result<TestCase, String> {
    let (value, expected) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected VALUE=EXPECTED, got '{}'", arg))?;
    let candidate = Candidate::parse(value).map_err(|e| e.to_string())?;
    let expected: Verdict = expected.parse()?;
    Ok(TestCase::new(candidate, expected))
}
