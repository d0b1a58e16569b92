use crate::{ProbeError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricAggregate {
    pub count: u64,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricAggregate {
    /// Reduces the filtered values, summing in sequence order.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ProbeError::NoValidDatapoints);
        }

        let mut aggregate = MetricAggregate {
            count: 0,
            sum: 0.0,
            average: 0.0,
            min: f64::MAX,
            max: f64::MIN,
        };

        for &value in values {
            aggregate.count += 1;
            aggregate.sum += value;
            aggregate.min = aggregate.min.min(value);
            aggregate.max = aggregate.max.max(value);
        }
        aggregate.average = aggregate.sum / aggregate.count as f64;

        Ok(aggregate)
    }
}

/// Arithmetic mean of `values`, or `NoValidDatapoints` when empty.
pub fn mean(values: &[f64]) -> Result<f64> {
    MetricAggregate::from_values(values).map(|agg| agg.average)
}
