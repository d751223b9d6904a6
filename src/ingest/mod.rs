//! Data ingest: CSV loading and monthly time-index assignment.

mod calendar;
mod reader;

pub use calendar::{default_origin, infer_origin, monthly_index};
pub use reader::{read_production_csv, ProductionTable, PRODUCTION_FIELD};
