//! Integration tests for entity file loading.

use std::path::Path;

use dwh_ingest::{
    FileKind, IngestError, column_values, read_entity_table, require_inputs, write_csv_table,
};
use dwh_model::Entity;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn entity_table_loads_as_strings_with_markers_as_missing() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "courses_raw.csv",
        "CourseID,Title,Credits,Type,DepartmentID\nC1,Algebra,3,Core,D1\nC2,NaN,-1,,D1\n",
    );

    let df = read_entity_table(&dir.path().join("courses_raw.csv"), Entity::Course).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(
        column_values(&df, "Title").unwrap(),
        vec![Some("Algebra".to_string()), None]
    );
    assert_eq!(
        column_values(&df, "Credits").unwrap(),
        vec![Some("3".to_string()), Some("-1".to_string())]
    );
}

#[test]
fn header_only_file_yields_empty_frame() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "grades_raw.csv", "GradeID,Grade,ScoreRange\n");
    let df = read_entity_table(&dir.path().join("grades_raw.csv"), Entity::Grade).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 3);
}

#[test]
fn written_tables_reload_identically() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "grades_raw.csv",
        "GradeID,Grade,ScoreRange\nG1,A,90-100\nG2,,80-89\n",
    );
    let mut df = read_entity_table(&dir.path().join("grades_raw.csv"), Entity::Grade).unwrap();
    let out = dir.path().join("cleaned").join("grades_clean.csv");
    write_csv_table(&mut df, &out).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text, "GradeID,Grade,ScoreRange\nG1,A,90-100\nG2,,80-89\n");
}

#[test]
fn empty_directory_reports_all_inputs_missing() {
    let dir = TempDir::new().unwrap();
    match require_inputs(dir.path(), FileKind::Cleaned) {
        Err(IngestError::MissingInputs { files, .. }) => assert_eq!(files.len(), 15),
        other => panic!("unexpected result: {other:?}"),
    }
}
