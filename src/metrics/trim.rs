use tracing::debug;

use crate::models::Datapoint;

/// Drops `first` points from the front and `last` from the back, then
/// removes null values from what remains.
///
/// Trimming is positional on the raw sequence, so nulls count towards the
/// drop counts. Over-trimming yields an empty result rather than an error.
pub fn trim_datapoints(datapoints: &[Datapoint], first: usize, last: usize) -> Vec<f64> {
    let len = datapoints.len();
    let end = len.saturating_sub(last);

    if first >= end {
        debug!(
            "drop-first {} + drop-last {} leaves nothing of {} datapoints",
            first, last, len
        );
        return Vec::new();
    }

    datapoints[first..end]
        .iter()
        .filter_map(Datapoint::value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[Option<f64>]) -> Vec<Datapoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Datapoint(*v, 1339512060 + 60 * i as i64))
            .collect()
    }

    #[test]
    fn test_no_trim() {
        let dps = points(&[Some(1.0), Some(2.0), Some(6.0), Some(7.0)]);
        assert_eq!(trim_datapoints(&dps, 0, 0), vec![1.0, 2.0, 6.0, 7.0]);
    }

    #[test]
    fn test_drop_first_and_last() {
        let dps = points(&[Some(1.0), Some(2.0), Some(6.0), Some(7.0)]);
        assert_eq!(trim_datapoints(&dps, 1, 0), vec![2.0, 6.0, 7.0]);
        assert_eq!(trim_datapoints(&dps, 0, 1), vec![1.0, 2.0, 6.0]);
        assert_eq!(trim_datapoints(&dps, 1, 1), vec![2.0, 6.0]);
    }

    #[test]
    fn test_trim_happens_before_null_filter() {
        // The null at the front is consumed by drop-first, not the 5.0.
        let dps = points(&[None, Some(5.0), None, Some(3.0)]);
        assert_eq!(trim_datapoints(&dps, 1, 0), vec![5.0, 3.0]);
        assert_eq!(trim_datapoints(&dps, 2, 0), vec![3.0]);
    }

    #[test]
    fn test_nulls_removed() {
        let dps = points(&[Some(5.0), None, None, Some(3.0)]);
        assert_eq!(trim_datapoints(&dps, 0, 0), vec![5.0, 3.0]);
    }

    #[test]
    fn test_over_trim_is_empty() {
        let dps = points(&[Some(1.0), Some(2.0), Some(3.0)]);
        assert!(trim_datapoints(&dps, 2, 1).is_empty());
        assert!(trim_datapoints(&dps, 2, 2).is_empty());
        assert!(trim_datapoints(&dps, 10, 0).is_empty());
        assert!(trim_datapoints(&dps, 0, 10).is_empty());
        assert!(trim_datapoints(&[], 0, 0).is_empty());
    }
}
