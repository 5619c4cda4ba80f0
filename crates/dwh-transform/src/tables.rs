//! The set of cleaned tables handed to the assembler.

use std::collections::BTreeMap;

use dwh_ingest::{IngestError, column_values, parse_f64};
use dwh_model::Entity;
use polars::prelude::DataFrame;

use crate::error::{Result, TransformError};

/// Cleaned entity frames keyed by entity.
#[derive(Debug, Clone, Default)]
pub struct CleanedTables {
    tables: BTreeMap<Entity, DataFrame>,
}

impl CleanedTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: Entity, data: DataFrame) {
        self.tables.insert(entity, data);
    }

    pub fn get(&self, entity: Entity) -> Result<&DataFrame> {
        self.tables
            .get(&entity)
            .ok_or(TransformError::MissingTable(entity))
    }

    /// Trimmed text of one column; blank cells read as missing.
    pub(crate) fn text(&self, entity: Entity, column: &str) -> Result<Vec<Option<String>>> {
        let df = self.get(entity)?;
        let values = column_values(df, column).map_err(|err| match err {
            IngestError::ColumnNotFound { column } => {
                TransformError::MissingColumn { entity, column }
            }
            other => TransformError::Ingest(other),
        })?;
        Ok(values
            .into_iter()
            .map(|v| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
            .collect())
    }

    pub(crate) fn numbers(&self, entity: Entity, column: &str) -> Result<Vec<Option<f64>>> {
        Ok(self
            .text(entity, column)?
            .iter()
            .map(|v| v.as_deref().and_then(parse_f64))
            .collect())
    }
}

impl FromIterator<(Entity, DataFrame)> for CleanedTables {
    fn from_iter<I: IntoIterator<Item = (Entity, DataFrame)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
