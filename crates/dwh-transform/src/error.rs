//! Error types for the dimensional transformation.

use dwh_ingest::IngestError;
use dwh_model::Entity;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A cleaned entity table was not supplied.
    #[error("cleaned {0} table is missing")]
    MissingTable(Entity),

    /// A cleaned table lacks a column the join chain reads.
    #[error("cleaned {entity} table has no '{column}' column")]
    MissingColumn { entity: Entity, column: String },

    /// Failed DataFrame operation.
    #[error("frame operation failed: {0}")]
    Frame(#[from] PolarsError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
