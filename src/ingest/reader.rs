//! CSV loading for production data.
//!
//! Turns a delimited byte stream into a validated production column plus an
//! optional raw date index. Validation happens here, at the boundary:
//! a missing header or a non-numeric cell is reported as a typed error
//! instead of flowing into the arithmetic as NaN.

use std::io::Read;

use crate::error::{MilkcastError, Result};

/// Canonical name given to the production column after loading.
pub const PRODUCTION_FIELD: &str = "Production";

/// Parsed tabular input: production values plus an optional raw index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionTable {
    /// Raw cells of the leading index column, when one is present.
    index: Option<Vec<String>>,
    /// Parsed production values, one per data row.
    values: Vec<f64>,
}

impl ProductionTable {
    /// Raw index cells, if the CSV carried an index column.
    pub fn index(&self) -> Option<&[String]> {
        self.index.as_deref()
    }

    /// First cell of the index column, used for origin inference.
    pub fn first_index_cell(&self) -> Option<&str> {
        self.index
            .as_deref()
            .and_then(|cells| cells.first())
            .map(String::as_str)
    }

    /// Parsed production values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the table, returning the production values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Read a CSV with a header row, locating the production column by label.
///
/// The column whose header matches `production_label` exactly (after
/// trimming and BOM removal) is canonicalized to [`PRODUCTION_FIELD`].
/// The first column other than the production column, if any, is captured
/// as a raw index for the time-index assigner.
///
/// # Errors
/// * [`MilkcastError::MissingColumn`] if no header matches the label.
/// * [`MilkcastError::NonNumericValue`] if a production cell is empty or
///   fails to parse as a finite number. Line numbers are 1-based and
///   count the header row.
/// * [`MilkcastError::EmptyData`] if the file has no data rows.
pub fn read_production_csv<R: Read>(reader: R, production_label: &str) -> Result<ProductionTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| MilkcastError::Csv(format!("failed to read headers: {e}")))?
        .clone();

    let production_idx = headers
        .iter()
        .position(|name| normalize_header(name) == production_label.trim())
        .ok_or_else(|| MilkcastError::MissingColumn {
            label: production_label.to_string(),
        })?;

    let index_idx = (0..headers.len()).find(|&i| i != production_idx);

    let mut values = Vec::new();
    let mut index_cells = Vec::new();

    for (row, result) in csv_reader.records().enumerate() {
        // Records start on line 2: line 1 is the header.
        let line = row + 2;

        let record = result.map_err(|e| MilkcastError::Csv(format!("line {line}: {e}")))?;

        let cell = record.get(production_idx).unwrap_or("");
        let value = cell
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| MilkcastError::NonNumericValue {
                line,
                value: cell.to_string(),
            })?;
        values.push(value);

        if let Some(idx) = index_idx {
            index_cells.push(record.get(idx).unwrap_or("").to_string());
        }
    }

    if values.is_empty() {
        return Err(MilkcastError::EmptyData);
    }

    Ok(ProductionTable {
        index: index_idx.map(|_| index_cells),
        values,
    })
}

/// Strip a UTF-8 BOM and surrounding whitespace from a header cell.
///
/// Spreadsheet exports often prefix the first header with a BOM; without
/// stripping it the production column would be reported missing.
fn normalize_header(name: &str) -> &str {
    name.trim().trim_start_matches('\u{feff}')
}
