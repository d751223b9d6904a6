//! Accuracy metrics for forecast evaluation.

use crate::error::{MilkcastError, Result};

/// Accuracy metrics comparing a forecast against held-out actuals.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error (None if zeros in actual)
    pub mape: Option<f64>,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Errors
/// * [`MilkcastError::EmptyData`] if either slice is empty.
/// * [`MilkcastError::DimensionMismatch`] if lengths differ.
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(MilkcastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(MilkcastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let n = actual.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut pct_sum = 0.0;
    let mut smape_sum = 0.0;
    let mut has_zero_actual = false;

    for (&a, &p) in actual.iter().zip(predicted) {
        let err = a - p;
        abs_sum += err.abs();
        sq_sum += err * err;

        if a == 0.0 {
            has_zero_actual = true;
        } else {
            pct_sum += (err / a).abs();
        }

        let denom = (a.abs() + p.abs()) / 2.0;
        if denom > 0.0 {
            smape_sum += err.abs() / denom;
        }
    }

    let mse = sq_sum / n;
    Ok(AccuracyMetrics {
        mae: abs_sum / n,
        mse,
        rmse: mse.sqrt(),
        mape: if has_zero_actual {
            None
        } else {
            Some(100.0 * pct_sum / n)
        },
        smape: 100.0 * smape_sum / n,
    })
}
