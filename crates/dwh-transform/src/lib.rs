//! Dimensional transformation for the university data mart.
//!
//! - **metrics**: attendance rate, exam score average, feedback deviation
//! - **assembler**: the join chain producing the fact grain
//! - **dim_date**: admission date dimension with dense surrogate keys
//! - **mart**: the assembled [`DataMart`] and its output frames

pub mod assembler;
pub mod dim_date;
mod error;
mod join;
pub mod mart;
pub mod metrics;
mod tables;

pub use assembler::{assemble, dropout_flag};
pub use dim_date::build_dim_date;
pub use error::{Result, TransformError};
pub use mart::{DataMart, render_metric};
pub use tables::CleanedTables;
