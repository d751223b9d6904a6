//! Core data structures: observation series and forecast containers.

mod forecast;
mod time_series;

pub use forecast::Forecast;
pub use time_series::MonthlySeries;
