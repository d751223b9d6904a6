//! The end-to-end analysis pipeline.
//!
//! Consolidates the whole dashboard computation into one pure function of
//! the uploaded bytes: load CSV, assign a monthly index, smooth, split,
//! forecast, and evaluate. The host (CLI, server handler, UI callback)
//! owns the interaction loop and re-runs the pipeline per upload; the
//! pipeline itself holds no UI or session state.

use std::io::Read;

use chrono::{DateTime, Utc};

use crate::core::MonthlySeries;
use crate::error::Result;
use crate::ingest::{infer_origin, monthly_index, read_production_csv, PRODUCTION_FIELD};
use crate::models::{Forecaster, SimpleExponentialSmoothing};
use crate::transform::{ewm_mean_alpha, ewm_mean_span, rolling_mean};
use crate::utils::{calculate_metrics, holdout_split, AccuracyMetrics};

/// Confidence level used for forecast prediction intervals.
const INTERVAL_LEVEL: f64 = 0.95;

/// Tunable parameters for one pipeline run.
///
/// The defaults reproduce the dashboard's fixed configuration: a 12-month
/// SMA, a span-12 EMA, a second EMA with decay 0.6, a smoothing level of
/// 0.1, and an 80/20 chronological split.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Header text identifying the production column.
    pub production_label: String,
    /// Trailing window for the simple moving average.
    pub sma_window: usize,
    /// Span for the exponentially weighted mean (alpha = 2/(span+1)).
    pub ema_span: usize,
    /// Explicit decay factor for the second exponentially weighted mean.
    pub ema_alpha: f64,
    /// Fixed smoothing level for the exponential smoothing forecast.
    pub smoothing_level: f64,
    /// Fraction of the series held out as the test suffix.
    pub holdout_fraction: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            production_label: "Monthly milk production (pounds per cow)".to_string(),
            sma_window: 12,
            ema_span: 12,
            ema_alpha: 0.6,
            smoothing_level: 0.1,
            holdout_fraction: 0.2,
        }
    }
}

impl PipelineConfig {
    /// Set the production column label.
    pub fn with_production_label(mut self, label: impl Into<String>) -> Self {
        self.production_label = label.into();
        self
    }

    /// Set the SMA window size.
    pub fn with_sma_window(mut self, window: usize) -> Self {
        self.sma_window = window;
        self
    }

    /// Set the EMA span.
    pub fn with_ema_span(mut self, span: usize) -> Self {
        self.ema_span = span;
        self
    }

    /// Set the explicit EMA decay factor.
    pub fn with_ema_alpha(mut self, alpha: f64) -> Self {
        self.ema_alpha = alpha;
        self
    }

    /// Set the forecast smoothing level.
    pub fn with_smoothing_level(mut self, level: f64) -> Self {
        self.smoothing_level = level;
        self
    }

    /// Set the holdout fraction for the train/test split.
    pub fn with_holdout_fraction(mut self, fraction: f64) -> Self {
        self.holdout_fraction = fraction;
        self
    }
}

/// A derived series aligned 1:1 by position with the observation series.
///
/// Warm-up positions of windowed transforms are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    /// Display name, e.g. `SMA_12` or `Custom_EMA_0.6`.
    pub name: String,
    /// One value per observation.
    pub values: Vec<f64>,
}

/// Forecast over the test suffix, paired with the held-out actuals.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    /// Timestamps of the test partition.
    pub timestamps: Vec<DateTime<Utc>>,
    /// Actual production values over the test partition.
    pub actual: Vec<f64>,
    /// Forecast values, one per test timestamp.
    pub predicted: Vec<f64>,
    /// Lower prediction-interval bounds.
    pub lower: Option<Vec<f64>>,
    /// Upper prediction-interval bounds.
    pub upper: Option<Vec<f64>>,
    /// Accuracy of the forecast against the actuals.
    pub metrics: AccuracyMetrics,
}

impl ForecastOutcome {
    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.predicted.len()
    }
}

/// Everything one pipeline run hands to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// The loaded observation series.
    pub series: MonthlySeries,
    /// Smoothed series aligned to the observation series.
    pub derived: Vec<DerivedSeries>,
    /// Forecast over the held-out suffix.
    pub forecast: ForecastOutcome,
}

impl AnalysisReport {
    /// Look up a derived series by name.
    pub fn derived(&self, name: &str) -> Option<&DerivedSeries> {
        self.derived.iter().find(|s| s.name == name)
    }
}

/// The consolidated analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full analysis over an uploaded CSV.
    ///
    /// Steps, in order: load and validate the CSV, infer the time origin
    /// and assign a monthly index, compute the three smoothed series,
    /// split chronologically, fit exponential smoothing on the training
    /// prefix, and forecast one value per test timestamp.
    ///
    /// Each call is independent; nothing is retained between runs.
    pub fn run<R: Read>(&self, reader: R) -> Result<AnalysisReport> {
        let cfg = &self.config;

        let table = read_production_csv(reader, &cfg.production_label)?;
        let origin = infer_origin(table.first_index_cell())?;
        let timestamps = monthly_index(origin, table.len())?;
        let series = MonthlySeries::new(timestamps, table.into_values(), PRODUCTION_FIELD)?;

        let derived = vec![
            DerivedSeries {
                name: format!("SMA_{}", cfg.sma_window),
                values: rolling_mean(series.values(), cfg.sma_window),
            },
            DerivedSeries {
                name: format!("EMA_{}", cfg.ema_span),
                values: ewm_mean_span(series.values(), cfg.ema_span)?,
            },
            DerivedSeries {
                name: format!("Custom_EMA_{}", cfg.ema_alpha),
                values: ewm_mean_alpha(series.values(), cfg.ema_alpha)?,
            },
        ];

        let (train, test) = holdout_split(&series, cfg.holdout_fraction)?;

        let mut model = SimpleExponentialSmoothing::new(cfg.smoothing_level);
        model.fit(&train)?;
        let forecast = model.predict_with_intervals(test.len(), INTERVAL_LEVEL)?;

        let metrics = calculate_metrics(test.values(), forecast.values())?;
        let forecast = ForecastOutcome {
            timestamps: test.timestamps().to_vec(),
            actual: test.values().to_vec(),
            predicted: forecast.values().to_vec(),
            lower: forecast.lower().map(<[f64]>::to_vec),
            upper: forecast.upper().map(<[f64]>::to_vec),
            metrics,
        };

        Ok(AnalysisReport {
            series,
            derived,
            forecast,
        })
    }
}
