//! Shared model types for the university data mart pipeline.
//!
//! - **entity**: the fifteen raw entities, their files, columns and natural keys
//! - **mart**: fact/dimension output tables and their row types
//! - **metric**: recorded-or-unrecorded metric values
//! - **report**: per-stage row accounting (drops and repairs by reason)
//! - **options**: explicit input/output locations for each stage

pub mod columns;
pub mod entity;
pub mod error;
pub mod mart;
pub mod metric;
pub mod options;
pub mod report;

pub use entity::Entity;
pub use error::{ModelError, Result};
pub use mart::{DimDateRow, FactRow, MartTable};
pub use metric::{Metric, UNRECORDED_MARKER};
pub use options::PipelinePaths;
pub use report::{AssemblyReport, CleanReport, DropReason, RepairReason};
