// src/data_analysis/descriptive.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// Recorded (non-NaN) values as a contiguous array.
fn recorded_values(values: &[f64]) -> Array1<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Median of the recorded values, or 0.0 when there are none.
///
/// The 0.0 fallback is a "no signal" sentinel, not a reading; callers that
/// need to tell the two apart check the group count.
pub fn median_or_zero(values: &[f64]) -> f64 {
    let mut recorded = recorded_values(values);
    let n = recorded.len();
    if n == 0 {
        return 0.0;
    }
    if let Some(sorted) = recorded.as_slice_mut() {
        sorted.sort_by(f64::total_cmp);
    }
    if n % 2 == 0 {
        (recorded[n / 2 - 1] + recorded[n / 2]) / 2.0
    } else {
        recorded[n / 2]
    }
}

/// Maximum of the recorded values, or 0.0 when there are none.
pub fn max_or_zero(values: &[f64]) -> f64 {
    recorded_values(values).max().map(|max_val| *max_val).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median_or_zero(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median_or_zero(&[1.0, 3.0]), 2.0);
        assert_eq!(median_or_zero(&[10.0, 1.0]), 5.5);
        assert_eq!(median_or_zero(&[1.0, 1.0, 1000.0]), 1.0);
        assert_eq!(median_or_zero(&[4.0]), 4.0);
    }

    #[test]
    fn test_empty_group_falls_back_to_zero() {
        assert_eq!(median_or_zero(&[]), 0.0);
        assert_eq!(max_or_zero(&[]), 0.0);
    }

    #[test]
    fn test_nan_values_are_ignored() {
        assert_eq!(median_or_zero(&[f64::NAN, 2.0, 4.0]), 3.0);
        assert_eq!(max_or_zero(&[f64::NAN, 2.0, 4.0]), 4.0);
        assert_eq!(median_or_zero(&[f64::NAN]), 0.0);
        assert_eq!(max_or_zero(&[f64::NAN, f64::NAN]), 0.0);
    }

    #[test]
    fn test_max_handles_negative_values() {
        assert_eq!(max_or_zero(&[-3.0, -1.5, -7.0]), -1.5);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = [0.5, 9.0, 2.25, 7.0];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(median_or_zero(&forward), median_or_zero(&reversed));
        assert_eq!(max_or_zero(&forward), max_or_zero(&reversed));
    }
}
