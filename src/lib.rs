//! # milkcast
//!
//! Monthly production time series analysis library.
//!
//! Implements the computational core of a production-monitoring dashboard:
//! CSV ingest with a canonical production column, monthly time-index
//! assignment, moving-average smoothing (trailing SMA and exponentially
//! weighted means), a chronological train/test split, and a fixed-parameter
//! simple exponential smoothing forecast with accuracy metrics.
//!
//! The whole analysis is exposed as a single pure pipeline:
//!
//! ```no_run
//! use milkcast::pipeline::{Pipeline, PipelineConfig};
//! use std::fs::File;
//!
//! let file = File::open("monthly-milk-production.csv").unwrap();
//! let report = Pipeline::new(PipelineConfig::default()).run(file).unwrap();
//! println!("forecast horizon: {}", report.forecast.horizon());
//! ```

pub mod core;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use error::{MilkcastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, MonthlySeries};
    pub use crate::error::{MilkcastError, Result};
    pub use crate::models::Forecaster;
    pub use crate::pipeline::{AnalysisReport, Pipeline, PipelineConfig};
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
