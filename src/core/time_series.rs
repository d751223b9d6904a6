//! Monthly observation series.

use crate::error::{MilkcastError, Result};
use chrono::{DateTime, Months, Utc};

/// An ordered sequence of monthly observations.
///
/// Timestamps are strictly increasing and exactly month-spaced: each
/// timestamp is the previous one plus one calendar month. The series is
/// immutable after construction; derived series (moving averages,
/// forecasts) are produced as separate values aligned by position.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    name: String,
}

impl MonthlySeries {
    /// Create a new series, validating the monthly-spacing invariant.
    pub fn new(
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<f64>,
        name: impl Into<String>,
    ) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(MilkcastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        for pair in timestamps.windows(2) {
            let expected = pair[0].checked_add_months(Months::new(1));
            if expected != Some(pair[1]) {
                return Err(MilkcastError::MalformedTimestamp(format!(
                    "timestamps must advance by exactly one month: {} -> {}",
                    pair[0], pair[1]
                )));
            }
        }

        Ok(Self {
            timestamps,
            values,
            name: name.into(),
        })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Series label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observation timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Observation values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Check if any value is NaN or infinite.
    pub fn has_missing_values(&self) -> bool {
        self.values.iter().any(|v| v.is_nan() || v.is_infinite())
    }

    /// Extract a contiguous sub-series over `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Result<MonthlySeries> {
        if start > end {
            return Err(MilkcastError::InvalidParameter(
                "start must be <= end".to_string(),
            ));
        }
        if end > self.len() {
            return Err(MilkcastError::IndexOutOfBounds {
                index: end,
                size: self.len(),
            });
        }

        Ok(MonthlySeries {
            timestamps: self.timestamps[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
            name: self.name.clone(),
        })
    }
}
