use std::fmt;

use tracing::{info, warn};

use crate::thresholds::Thresholds;
use crate::ProbeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Renders a float the way the probe has always printed it: integral
/// values keep one decimal (`4.0`), others use the shortest round-trip form.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub status: Status,
    pub value: Option<f64>,
    pub message: String,
    pub perfdata: Option<String>,
}

impl RunResult {
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: Status::Unknown,
            value: None,
            message: message.into(),
            perfdata: None,
        }
    }

    /// UNKNOWN result for a failure that is never ignorable.
    pub fn internal_error(err: &ProbeError) -> Self {
        Self::unknown(format!("INTERNAL ERROR: {}: {}", err.kind(), err))
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }

    /// The single line written to stdout, newline included.
    pub fn output_line(&self) -> String {
        match &self.perfdata {
            Some(perf) => format!("{}: {}|{}\n", self.status, self.message, perf),
            None => format!("{}: {}\n", self.status, self.message),
        }
    }
}

/// Maps the pipeline outcome onto the four-state status model.
#[derive(Debug, Clone)]
pub struct StatusEvaluator {
    name: String,
    thresholds: Thresholds,
    ignore_missing: bool,
}

impl StatusEvaluator {
    pub fn new(name: impl Into<String>, thresholds: Thresholds, ignore_missing: bool) -> Self {
        Self {
            name: name.into(),
            thresholds,
            ignore_missing,
        }
    }

    fn perfdata(&self, rendered: &str) -> String {
        format!(
            "{}={};{};{};;",
            self.name,
            rendered,
            self.thresholds.warning_str(),
            self.thresholds.critical_str()
        )
    }

    pub fn evaluate(&self, outcome: Result<f64, ProbeError>) -> RunResult {
        match outcome {
            Ok(value) => self.classify(value),
            Err(err) if err.is_missing_data() && self.ignore_missing => {
                info!("{}, forcing OK because missing data is ignored", err);
                RunResult {
                    status: Status::Ok,
                    value: Some(0.0),
                    message: format!("{} missing - ignoring", self.name),
                    perfdata: Some(self.perfdata("0")),
                }
            }
            Err(err) if err.is_missing_data() => {
                warn!("{}", err);
                RunResult::unknown(err.to_string())
            }
            Err(err) => {
                warn!("{} failure: {}", err.kind(), err);
                RunResult::internal_error(&err)
            }
        }
    }

    fn classify(&self, value: f64) -> RunResult {
        let status = if self.thresholds.critical_alerts(value) {
            Status::Critical
        } else if self.thresholds.warning_alerts(value) {
            Status::Warning
        } else {
            Status::Ok
        };

        let rendered = format_value(value);
        info!("{} averaged to {} -> {}", self.name, rendered, status);

        RunResult {
            status,
            value: Some(value),
            message: format!("{}={}", self.name, rendered),
            perfdata: Some(self.perfdata(&rendered)),
        }
    }
}
