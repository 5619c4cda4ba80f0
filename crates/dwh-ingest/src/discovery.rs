//! Locating per-entity files in stage directories.

use std::path::{Path, PathBuf};

use dwh_model::Entity;

use crate::error::{IngestError, Result};

/// Which stage's naming convention to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `<stem>_raw.csv`
    Raw,
    /// `<stem>_clean.csv`
    Cleaned,
}

impl FileKind {
    pub fn file_name(self, entity: Entity) -> String {
        match self {
            FileKind::Raw => entity.raw_file_name(),
            FileKind::Cleaned => entity.clean_file_name(),
        }
    }
}

/// An expected entity file and whether it is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFile {
    pub entity: Entity,
    pub path: PathBuf,
    pub exists: bool,
}

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Maps every catalogue entity to its expected file in `dir`.
pub fn discover_entity_files(dir: &Path, kind: FileKind) -> Result<Vec<EntityFile>> {
    let present = list_csv_files(dir)?;
    Ok(Entity::ALL
        .into_iter()
        .map(|entity| {
            let path = dir.join(kind.file_name(entity));
            let exists = present.contains(&path);
            EntityFile {
                entity,
                path,
                exists,
            }
        })
        .collect())
}

/// Fails with every missing file named when any entity file is absent.
pub fn require_inputs(dir: &Path, kind: FileKind) -> Result<Vec<EntityFile>> {
    let files = discover_entity_files(dir, kind)?;
    let missing: Vec<String> = files
        .iter()
        .filter(|file| !file.exists)
        .map(|file| kind.file_name(file.entity))
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingInputs {
            dir: dir.to_path_buf(),
            files: missing,
        });
    }
    Ok(files)
}
