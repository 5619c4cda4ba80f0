//! CSV output for cleaned and mart tables.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Writes a frame as comma-delimited UTF-8 with a header row and no index.
///
/// Parent directories are created as needed. Nulls are written as empty fields.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|e| IngestError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(path = %path.display(), rows = df.height(), "wrote table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polars_utils::string_column;
    use crate::table::read_string_table;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let mut df = DataFrame::new(vec![
            string_column("A", vec![Some("1".to_string()), None]),
            string_column("B", vec![Some("x".to_string()), Some("y".to_string())]),
        ])
        .unwrap();

        write_csv_table(&mut df, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "A,B\n1,x\n,y\n");
        let back = read_string_table(&path).unwrap();
        assert_eq!(back.height(), 2);
    }
}
