use clap::Parser;
use reqwest::Url;
use std::time::Duration;

use crate::status::RunResult;
use crate::thresholds::{ThresholdRange, Thresholds};
use crate::{ProbeError, Result};

#[derive(Debug, Parser)]
#[command(author, version, about = "Average a Graphite series and compare it against thresholds", long_about = None)]
pub struct CliArgs {
    /// Graphite render endpoint, e.g. http://graphite.example/render
    #[arg(short = 'H', long)]
    pub endpoint: String,

    /// Metric target; may contain wildcards
    #[arg(short = 'M', long)]
    pub metric: String,

    /// Time window, sent as `from=-<window>`
    #[arg(short = 'F', long, default_value = "30seconds")]
    pub from: String,

    /// Label used in the message and performance data
    #[arg(short = 'N', long, default_value = "value")]
    pub name: String,

    #[arg(short = 'U', long)]
    pub username: Option<String>,

    #[arg(short = 'P', long)]
    pub password: Option<String>,

    /// Datapoints to drop from the start of the series
    #[arg(short = 'A', long, default_value_t = 0)]
    pub dropfirst: usize,

    /// Datapoints to drop from the end of the series
    #[arg(short = 'Z', long, default_value_t = 0)]
    pub droplast: usize,

    /// Report OK with value 0 when the series has no data
    #[arg(short = 'I', long = "ignore-missing")]
    pub ignore_missing: bool,

    /// Warning range, e.g. `10`, `10:`, `~:10`, `-10:-5`, `@5:10`
    #[arg(short, long, allow_hyphen_values = true)]
    pub warning: Option<String>,

    /// Critical range, same syntax as `--warning`
    #[arg(short, long, allow_hyphen_values = true)]
    pub critical: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validated settings for a single probe run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: Url,
    pub target: String,
    pub window: String,
    pub name: String,
    pub credentials: Option<Credentials>,
    pub drop_first: usize,
    pub drop_last: usize,
    pub ignore_missing: bool,
    pub thresholds: Thresholds,
    pub timeout: Duration,
}

fn default_window() -> String {
    String::from("30seconds")
}
fn default_name() -> String {
    String::from("value")
}
fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| ProbeError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProbeError::Config(format!(
            "unsupported endpoint scheme '{}'",
            other
        ))),
    }
}

fn parse_threshold(value: Option<&str>) -> Result<Option<ThresholdRange>> {
    value.map(str::parse::<ThresholdRange>).transpose()
}

/// Single-line UNKNOWN result for a rejected command line.
pub fn argument_error(err: &clap::Error) -> RunResult {
    // First paragraph of clap's report, folded onto one line.
    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let summary = summary.trim_start_matches("error: ");
    if summary.is_empty() {
        RunResult::unknown("invalid arguments")
    } else {
        RunResult::unknown(summary)
    }
}

impl RunConfig {
    /// Config with defaults for everything but the endpoint and target.
    pub fn new(endpoint: &str, target: impl Into<String>) -> Result<Self> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            target: target.into(),
            window: default_window(),
            name: default_name(),
            credentials: None,
            drop_first: 0,
            drop_last: 0,
            ignore_missing: false,
            thresholds: Thresholds::default(),
            timeout: default_timeout(),
        })
    }

    pub fn from_args(args: CliArgs) -> Result<Self> {
        let thresholds = Thresholds {
            warning: parse_threshold(args.warning.as_deref())?,
            critical: parse_threshold(args.critical.as_deref())?,
        };

        let credentials = match (args.username, args.password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        if args.timeout == 0 {
            return Err(ProbeError::Config("timeout must be at least 1 second".to_string()));
        }

        Ok(Self {
            endpoint: parse_endpoint(&args.endpoint)?,
            target: args.metric,
            window: args.from,
            name: args.name,
            credentials,
            drop_first: args.dropfirst,
            drop_last: args.droplast,
            ignore_missing: args.ignore_missing,
            thresholds,
            timeout: Duration::from_secs(args.timeout),
        })
    }
}
