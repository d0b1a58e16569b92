pub mod aggregate;
pub mod trim;

use tracing::{debug, trace};

use crate::models::{Datapoint, Series};
use crate::{ProbeError, Result};

pub use aggregate::MetricAggregate;
pub use trim::trim_datapoints;

/// Flattens a render response body into one datapoint sequence.
///
/// Series are concatenated in response order; no re-sorting across series.
/// A body of `[]` (or any array holding no series) is `EmptySeries`.
pub fn extract_datapoints(body: &str) -> Result<Vec<Datapoint>> {
    if body.trim() == "[]" {
        return Err(ProbeError::EmptySeries);
    }

    let series: Vec<Series> = serde_json::from_str(body)?;
    if series.is_empty() {
        return Err(ProbeError::EmptySeries);
    }

    for s in &series {
        trace!("series {} has {} datapoints", s.target, s.datapoints.len());
    }

    let datapoints: Vec<Datapoint> = series.into_iter().flat_map(|s| s.datapoints).collect();

    if let (Some(first), Some(last)) = (datapoints.first(), datapoints.last()) {
        debug!(
            "extracted {} datapoints spanning {:?} .. {:?}",
            datapoints.len(),
            first.time(),
            last.time()
        );
    }

    Ok(datapoints)
}
