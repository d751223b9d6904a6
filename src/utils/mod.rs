//! Shared utilities: splitting, metrics, and statistics helpers.

mod metrics;
mod split;
pub mod stats;

pub use metrics::{calculate_metrics, AccuracyMetrics};
pub use split::holdout_split;
