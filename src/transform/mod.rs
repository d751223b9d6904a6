//! Series transforms: rolling windows and exponentially weighted means.

mod ewm;
mod window;

pub use ewm::{ewm_mean_alpha, ewm_mean_span};
pub use window::rolling_mean;
