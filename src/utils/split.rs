//! Chronological train/test splitting.

use crate::core::MonthlySeries;
use crate::error::{MilkcastError, Result};

/// Partition a series into a training prefix and a test suffix.
///
/// The training set takes the first `floor((1 - holdout_fraction) * n)`
/// observations and the test set takes the remainder. Order is preserved
/// and nothing is shuffled; concatenating train and test reconstructs the
/// input exactly.
///
/// # Errors
/// * [`MilkcastError::InvalidParameter`] unless `0 < holdout_fraction < 1`.
/// * [`MilkcastError::DegenerateSplit`] if either partition comes out
///   empty (e.g. a one-point series), so no forecast is attempted on it.
pub fn holdout_split(
    series: &MonthlySeries,
    holdout_fraction: f64,
) -> Result<(MonthlySeries, MonthlySeries)> {
    if !(holdout_fraction > 0.0 && holdout_fraction < 1.0) {
        return Err(MilkcastError::InvalidParameter(format!(
            "holdout fraction must be in (0, 1), got {holdout_fraction}"
        )));
    }

    let n = series.len();
    let train_len = ((1.0 - holdout_fraction) * n as f64).floor() as usize;
    let test_len = n - train_len;

    if train_len == 0 || test_len == 0 {
        return Err(MilkcastError::DegenerateSplit {
            train: train_len,
            test: test_len,
        });
    }

    let train = series.slice(0, train_len)?;
    let test = series.slice(train_len, n)?;
    Ok((train, test))
}
