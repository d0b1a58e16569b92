use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One `[value, timestamp]` pair from a render response.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Datapoint(pub Option<f64>, pub i64);

impl Datapoint {
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn timestamp(&self) -> i64 {
        self.1
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.1, 0)
    }
}

/// A single named series. Unknown fields in the response are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub target: String,
    pub datapoints: Vec<Datapoint>,
}
