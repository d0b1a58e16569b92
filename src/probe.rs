use tracing::debug;

use crate::api::MetricsSource;
use crate::config::RunConfig;
use crate::metrics::{extract_datapoints, trim_datapoints, MetricAggregate};
use crate::status::{RunResult, StatusEvaluator};
use crate::Result;

/// Fetch, extract, trim, and average. Any stage may short-circuit.
pub async fn compute_value<S>(source: &S, config: &RunConfig) -> Result<f64>
where
    S: MetricsSource + ?Sized,
{
    let body = source.fetch(&config.target, &config.window).await?;
    let datapoints = extract_datapoints(&body)?;
    let values = trim_datapoints(&datapoints, config.drop_first, config.drop_last);
    let aggregate = MetricAggregate::from_values(&values)?;
    debug!(
        "aggregate over {} values: sum={} min={} max={}",
        aggregate.count, aggregate.sum, aggregate.min, aggregate.max
    );
    Ok(aggregate.average)
}

/// Runs the whole probe once and returns the classified result.
pub async fn run_probe<S>(source: &S, config: &RunConfig) -> RunResult
where
    S: MetricsSource + ?Sized,
{
    let evaluator = StatusEvaluator::new(
        config.name.clone(),
        config.thresholds.clone(),
        config.ignore_missing,
    );
    evaluator.evaluate(compute_value(source, config).await)
}
