//! Warning/critical ranges in the usual monitoring-plugin syntax.
//!
//! `10` alerts outside `0..=10`, `10:` below 10, `~:10` above 10,
//! `5:10` outside `5..=10`, and a leading `@` inverts the match so the
//! range alerts when the value falls inside it.

use std::fmt;
use std::str::FromStr;

use crate::ProbeError;

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRange {
    raw: String,
    start: f64,
    end: f64,
    inside: bool,
}

impl ThresholdRange {
    /// True when `value` lies in the alerting region of this range.
    pub fn alerts(&self, value: f64) -> bool {
        let within = value >= self.start && value <= self.end;
        if self.inside {
            within
        } else {
            !within
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn parse_bound(s: &str, field: &str, raw: &str) -> Result<f64, ProbeError> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ProbeError::Config(format!(
            "invalid {} in threshold '{}'",
            field, raw
        ))),
    }
}

impl FromStr for ThresholdRange {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ProbeError::Config("empty threshold".to_string()));
        }

        let (inside, spec) = match raw.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (start, end) = match spec.split_once(':') {
            Some((start, end)) => {
                let start = match start.trim() {
                    "~" => f64::NEG_INFINITY,
                    "" => 0.0,
                    s => parse_bound(s, "start", raw)?,
                };
                let end = match end.trim() {
                    "" => f64::INFINITY,
                    e => parse_bound(e, "end", raw)?,
                };
                (start, end)
            }
            None => (0.0, parse_bound(spec, "end", raw)?),
        };

        if start > end {
            return Err(ProbeError::Config(format!(
                "threshold '{}' has start greater than end",
                raw
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
            start,
            end,
            inside,
        })
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Warning and critical ranges. An unset range never triggers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thresholds {
    pub warning: Option<ThresholdRange>,
    pub critical: Option<ThresholdRange>,
}

impl Thresholds {
    pub fn critical_alerts(&self, value: f64) -> bool {
        self.critical.as_ref().map_or(false, |r| r.alerts(value))
    }

    pub fn warning_alerts(&self, value: f64) -> bool {
        self.warning.as_ref().map_or(false, |r| r.alerts(value))
    }

    pub fn warning_str(&self) -> &str {
        self.warning.as_ref().map_or("", |r| r.as_str())
    }

    pub fn critical_str(&self) -> &str {
        self.critical.as_ref().map_or("", |r| r.as_str())
    }
}
