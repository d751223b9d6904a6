//! Simple Exponential Smoothing (SES) forecasting model.
//!
//! SES is suitable for forecasting data with no clear trend or seasonality.

use crate::core::{Forecast, MonthlySeries};
use crate::error::{MilkcastError, Result};
use crate::models::Forecaster;
use crate::utils::stats::quantile_normal;

/// Simple Exponential Smoothing forecaster with a fixed smoothing level.
///
/// The model equation is:
/// `level_t = α × y_t + (1-α) × level_{t-1}`
///
/// where α (alpha) is the smoothing parameter (0 < α < 1). The parameter
/// is taken as given; there is no likelihood or SSE optimization. The
/// forecast for every future step is the final level reached at the end
/// of the training data, which is a structural property of SES with no
/// trend or seasonal component.
///
/// # Example
/// ```
/// use milkcast::models::{Forecaster, SimpleExponentialSmoothing};
/// use milkcast::core::MonthlySeries;
/// use milkcast::ingest::{default_origin, monthly_index};
///
/// let timestamps = monthly_index(default_origin(), 5).unwrap();
/// let values = vec![589.0, 561.0, 640.0, 656.0, 727.0];
/// let series = MonthlySeries::new(timestamps, values, "Production").unwrap();
///
/// let mut model = SimpleExponentialSmoothing::new(0.1);
/// model.fit(&series).unwrap();
///
/// let forecast = model.predict(3).unwrap();
/// assert_eq!(forecast.horizon(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Current level state.
    level: Option<f64>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Residuals.
    residuals: Option<Vec<f64>>,
    /// Residual variance for prediction intervals.
    residual_variance: Option<f64>,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model with a fixed smoothing parameter.
    ///
    /// # Arguments
    /// * `alpha` - Smoothing parameter, clamped into (0, 1)
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0001, 0.9999),
            level: None,
            fitted: None,
            residuals: None,
            residual_variance: None,
        }
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the current level.
    pub fn level(&self) -> Option<f64> {
        self.level
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        if values.is_empty() {
            return Err(MilkcastError::EmptyData);
        }

        // Initialize level with first observation
        let mut level = values[0];
        let mut fitted = Vec::with_capacity(values.len());
        let mut residuals = Vec::with_capacity(values.len());

        // First fitted value is the initial level
        fitted.push(level);
        residuals.push(0.0); // No residual for first observation

        // Compute fitted values and residuals
        for &y in &values[1..] {
            let forecast = level;
            fitted.push(forecast);
            residuals.push(y - forecast);
            level = self.alpha * y + (1.0 - self.alpha) * level;
        }

        self.level = Some(level);
        self.fitted = Some(fitted);

        // Residual variance over everything past the first observation
        let valid_residuals = &residuals[1..];
        if !valid_residuals.is_empty() {
            let variance = valid_residuals.iter().map(|r| r * r).sum::<f64>()
                / valid_residuals.len() as f64;
            self.residual_variance = Some(variance);
        }

        self.residuals = Some(residuals);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let level = self.level.ok_or(MilkcastError::FitRequired)?;

        if horizon == 0 {
            return Ok(Forecast::new());
        }

        // SES produces flat forecasts at the final level
        Ok(Forecast::from_values(vec![level; horizon]))
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        let current_level = self.level.ok_or(MilkcastError::FitRequired)?;
        let variance = self.residual_variance.unwrap_or(0.0);

        if horizon == 0 {
            return Ok(Forecast::new());
        }

        let z = quantile_normal((1.0 + level) / 2.0);
        let predictions = vec![current_level; horizon];
        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);

        for h in 1..=horizon {
            // Var(e_{n+h}) = sigma^2 * (1 + sum_{j=1}^{h-1} (1-alpha)^{2j})
            let factor = if h == 1 {
                1.0
            } else {
                let beta = 1.0 - self.alpha;
                let beta2 = beta * beta;
                if (1.0 - beta2).abs() < 1e-10 {
                    h as f64
                } else {
                    1.0 + beta2 * (1.0 - beta2.powi((h - 1) as i32)) / (1.0 - beta2)
                }
            };
            let se = (variance * factor).sqrt();
            lower.push(current_level - z * se);
            upper.push(current_level + z * se);
        }

        Forecast::from_values_with_intervals(predictions, lower, upper)
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "SimpleExponentialSmoothing"
    }
}
