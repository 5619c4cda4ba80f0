//! Polars helpers for all-string entity frames.
//!
//! Raw files are loaded with every column typed as `String`. These helpers
//! move cells between frames and plain `Option<String>` vectors, treating the
//! usual spreadsheet null markers as missing.

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::{IngestError, Result};

/// Cell texts treated as missing after trimming.
pub const NULL_MARKERS: &[&str] = &[
    "", "nan", "NaN", "NA", "N/A", "NULL", "null", "None", "<NA>", "NaT",
];

/// Returns true when a cell should be read as missing.
pub fn is_null_marker(value: &str) -> bool {
    NULL_MARKERS.contains(&value.trim())
}

/// Maps a raw cell to `None` when it is absent or a null marker.
///
/// The text itself is returned untrimmed; trimming is a per-field decision.
pub fn normalize_cell(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !is_null_marker(v) => Some(v.to_string()),
        _ => None,
    }
}

/// Formats a number without a trailing `.0`.
///
/// `3.0` becomes `3`, `0.50` becomes `0.5`, integers keep their zeros.
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Parses a string as f64, returning None for invalid, empty or non-finite input.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extracts a column as owned optional strings, null markers mapped to `None`.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| IngestError::ColumnNotFound {
            column: name.to_string(),
        })?
        .cast(&DataType::String)?;
    let values = column.str()?;
    Ok(values.into_iter().map(normalize_cell).collect())
}

/// Builds a string column from optional values.
pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Column::new(name.into(), values)
}
