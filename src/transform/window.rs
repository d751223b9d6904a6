//! Trailing rolling-window statistics.

/// Compute a trailing simple moving average.
///
/// Output at position `i` is the arithmetic mean of
/// `series[i + 1 - window ..= i]`. Positions with fewer than `window`
/// observations behind them are undefined and reported as NaN, matching
/// the warm-up behavior of a trailing window.
///
/// An empty series or a zero window yields all-NaN output of the input
/// length.
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    if n == 0 || window == 0 {
        return vec![f64::NAN; n];
    }

    let mut result = vec![f64::NAN; n];
    for i in (window - 1)..n {
        let start = i + 1 - window;
        let sum: f64 = series[start..=i].iter().sum();
        result[i] = sum / window as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trailing_mean_matches_hand_calculation() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_mean(&series, 3);

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 2.0, epsilon = 1e-10);
        assert_relative_eq!(result[3], 3.0, epsilon = 1e-10);
        assert_relative_eq!(result[4], 4.0, epsilon = 1e-10);
    }

    #[test]
    fn twelve_point_ramp_averages_to_650() {
        // 100, 200, ..., 1200: the first defined output is the full-window mean.
        let series: Vec<f64> = (1..=12).map(|i| (i * 100) as f64).collect();
        let result = rolling_mean(&series, 12);

        for value in &result[..11] {
            assert!(value.is_nan());
        }
        assert_relative_eq!(result[11], 650.0, epsilon = 1e-10);
    }

    #[test]
    fn series_shorter_than_window_is_all_undefined() {
        let series: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let result = rolling_mean(&series, 12);

        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn window_of_one_is_identity() {
        let series = vec![3.0, 1.0, 4.0];
        let result = rolling_mean(&series, 1);
        assert_eq!(result, series);
    }

    #[test]
    fn zero_window_and_empty_input_yield_nan() {
        assert!(rolling_mean(&[1.0, 2.0], 0).iter().all(|v| v.is_nan()));
        assert!(rolling_mean(&[], 3).is_empty());
    }
}
