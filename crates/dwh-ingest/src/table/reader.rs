//! CSV reading into all-string frames.

use std::fs::File;
use std::path::Path;

use dwh_model::Entity;
use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads the header row, trimmed and with any UTF-8 BOM removed.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let file = open_file(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let columns: Vec<String> = record
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Reads a CSV file with every column typed as `String`.
///
/// Empty fields load as nulls. Column names are replaced by the trimmed
/// header so stray spaces in the source do not hide a column.
pub fn read_string_table(path: &Path) -> Result<DataFrame> {
    let headers = read_csv_headers(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} fields but {} columns were parsed",
                headers.len(),
                df.width()
            ),
        });
    }
    df.set_column_names(headers.iter().map(String::as_str))?;

    Ok(df)
}

/// Reads one entity's file after checking its required columns are present.
pub fn read_entity_table(path: &Path, entity: Entity) -> Result<DataFrame> {
    let headers = read_csv_headers(path)?;
    let missing: Vec<String> = entity
        .required_columns()
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| (*required).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let df = read_string_table(path)?;
    debug!(
        entity = %entity,
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_headers_with_bom_and_spaces() {
        let file = create_temp_csv("\u{feff}A, B ,C\n1,2,3\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_headers_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_headers(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_string_table_keeps_text() {
        let file = create_temp_csv("ID,Credits\n007,3.0\n008,\n");
        let df = read_string_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("ID").unwrap().dtype(), &DataType::String);
        let credits = df.column("Credits").unwrap().str().unwrap();
        assert_eq!(credits.get(0), Some("3.0"));
        assert_eq!(credits.get(1), None);
    }

    #[test]
    fn test_read_entity_table_reports_missing_columns() {
        let file = create_temp_csv("GradeID,Grade\nG1,A\n");
        let result = read_entity_table(file.path(), Entity::Grade);
        match result {
            Err(IngestError::MissingColumns { columns, .. }) => {
                assert_eq!(columns, vec!["ScoreRange".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_string_table(Path::new("/nonexistent/file.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
