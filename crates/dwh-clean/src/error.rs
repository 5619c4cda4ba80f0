//! Error types for entity cleaning.

use dwh_ingest::IngestError;
use dwh_model::Entity;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that abort cleaning of one entity table.
///
/// Bad rows never produce an error; they are dropped or repaired and counted
/// in the [`CleanReport`](dwh_model::CleanReport).
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input frame lacks a column the cleaner reads.
    #[error("{entity} table is missing column '{column}'")]
    MissingColumn { entity: Entity, column: String },

    /// No cleaner is registered for the entity.
    #[error("no cleaner registered for {0}")]
    NotRegistered(Entity),

    /// Failed DataFrame operation.
    #[error("frame operation failed: {0}")]
    Frame(#[from] PolarsError),

    /// Failure reading cells through the ingest helpers.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
