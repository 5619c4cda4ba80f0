//! Data ingestion for the university data mart.
//!
//! Every entity file is loaded as an all-string Polars `DataFrame`; typing is
//! the cleaners' job. This crate covers:
//!
//! - **Header checks**: required columns verified with the `csv` reader before loading
//! - **Frame I/O**: reading and writing comma-delimited files with a header row
//! - **Discovery**: locating the per-entity input files of a stage
//! - **Cell helpers**: null markers, numeric formatting and column extraction

mod table;
mod discovery;
mod error;
pub mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV I/O ===
pub use table::{read_csv_headers, read_entity_table, read_string_table, write_csv_table};

// === File Discovery ===
pub use discovery::{EntityFile, FileKind, discover_entity_files, list_csv_files, require_inputs};

// === Cell Helpers ===
pub use polars_utils::{
    column_values, format_numeric, is_null_marker, normalize_cell, parse_f64,
    string_column,
};
