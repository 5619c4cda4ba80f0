//! Input/output locations passed explicitly to every stage.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::entity::Entity;
use crate::mart::MartTable;

pub const DEFAULT_RAW_DIR_NAME: &str = "extracted";
pub const DEFAULT_CLEANED_DIR_NAME: &str = "cleaned";
pub const DEFAULT_TRANSFORMED_DIR_NAME: &str = "transformed";

/// Where each stage reads from and writes to.
///
/// Defaults lay the three directories out as siblings, so `data/extracted`
/// pairs with `data/cleaned` and `data/transformed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelinePaths {
    pub raw_dir: PathBuf,
    pub cleaned_dir: PathBuf,
    pub transformed_dir: PathBuf,
}

impl PipelinePaths {
    pub fn new(
        raw_dir: impl Into<PathBuf>,
        cleaned_dir: impl Into<PathBuf>,
        transformed_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            cleaned_dir: cleaned_dir.into(),
            transformed_dir: transformed_dir.into(),
        }
    }

    /// Derive cleaned and transformed directories next to the raw directory.
    pub fn from_raw_dir(raw_dir: impl Into<PathBuf>) -> Self {
        let raw_dir = raw_dir.into();
        let cleaned_dir = sibling(&raw_dir, DEFAULT_CLEANED_DIR_NAME);
        let transformed_dir = sibling(&raw_dir, DEFAULT_TRANSFORMED_DIR_NAME);
        Self {
            raw_dir,
            cleaned_dir,
            transformed_dir,
        }
    }

    /// Derive raw and transformed directories next to an existing cleaned directory.
    pub fn from_cleaned_dir(cleaned_dir: impl Into<PathBuf>) -> Self {
        let cleaned_dir = cleaned_dir.into();
        let raw_dir = sibling(&cleaned_dir, DEFAULT_RAW_DIR_NAME);
        let transformed_dir = sibling(&cleaned_dir, DEFAULT_TRANSFORMED_DIR_NAME);
        Self {
            raw_dir,
            cleaned_dir,
            transformed_dir,
        }
    }

    #[must_use]
    pub fn with_cleaned_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cleaned_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_transformed_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.transformed_dir = dir.into();
        self
    }

    pub fn raw_path(&self, entity: Entity) -> PathBuf {
        self.raw_dir.join(entity.raw_file_name())
    }

    pub fn cleaned_path(&self, entity: Entity) -> PathBuf {
        self.cleaned_dir.join(entity.clean_file_name())
    }

    pub fn mart_path(&self, table: MartTable) -> PathBuf {
        self.transformed_dir.join(table.file_name())
    }
}

fn sibling(dir: &Path, name: &str) -> PathBuf {
    match dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => dir.join(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sibling_directories() {
        let paths = PipelinePaths::from_raw_dir("/data/extracted");
        assert_eq!(paths.cleaned_dir, PathBuf::from("/data/cleaned"));
        assert_eq!(paths.transformed_dir, PathBuf::from("/data/transformed"));
        assert_eq!(
            paths.raw_path(Entity::Grade),
            PathBuf::from("/data/extracted/grades_raw.csv")
        );
    }

    #[test]
    fn bare_directory_nests_outputs() {
        let paths = PipelinePaths::from_raw_dir("raw");
        assert_eq!(paths.cleaned_dir, PathBuf::from("raw/cleaned"));
    }

    #[test]
    fn overrides_apply() {
        let paths = PipelinePaths::from_cleaned_dir("/data/cleaned").with_transformed_dir("/out");
        assert_eq!(
            paths.mart_path(MartTable::Date),
            PathBuf::from("/out/dim_date.csv")
        );
        assert_eq!(
            paths.cleaned_path(Entity::Student),
            PathBuf::from("/data/cleaned/students_clean.csv")
        );
    }
}
