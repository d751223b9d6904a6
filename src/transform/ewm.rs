//! Exponentially weighted moving means.
//!
//! Both entry points use the non-adjusted recurrence
//! `y[0] = x[0]; y[i] = alpha * x[i] + (1 - alpha) * y[i-1]`,
//! so the first output equals the first input exactly. There is no
//! cumulative-weight bias correction.

use crate::error::{MilkcastError, Result};

/// Exponentially weighted mean parameterized by span.
///
/// The decay factor is derived as `alpha = 2 / (span + 1)`.
///
/// # Errors
/// [`MilkcastError::InvalidParameter`] if `span` is zero.
pub fn ewm_mean_span(series: &[f64], span: usize) -> Result<Vec<f64>> {
    if span == 0 {
        return Err(MilkcastError::InvalidParameter(
            "span must be positive".to_string(),
        ));
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    Ok(ewm_recurrence(series, alpha))
}

/// Exponentially weighted mean with an explicit decay factor.
///
/// # Errors
/// [`MilkcastError::InvalidParameter`] unless `0 < alpha <= 1`.
pub fn ewm_mean_alpha(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(MilkcastError::InvalidParameter(format!(
            "alpha must be in (0, 1], got {alpha}"
        )));
    }
    Ok(ewm_recurrence(series, alpha))
}

fn ewm_recurrence(series: &[f64], alpha: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(series.len());
    let mut level = match series.first() {
        Some(&first) => first,
        None => return result,
    };
    result.push(level);

    for &x in &series[1..] {
        level = alpha * x + (1.0 - alpha) * level;
        result.push(level);
    }

    result
}
