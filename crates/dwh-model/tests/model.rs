//! Tests for dwh-model types.

use dwh_model::{
    CleanReport, DropReason, Entity, MartTable, Metric, RepairReason, UNRECORDED_MARKER,
};

#[test]
fn catalogue_covers_fifteen_entities_with_unique_files() {
    let mut stems: Vec<&str> = Entity::ALL.iter().map(|e| e.file_stem()).collect();
    stems.sort_unstable();
    stems.dedup();
    assert_eq!(stems.len(), 15);
}

#[test]
fn mart_tables_have_expected_files() {
    let files: Vec<String> = MartTable::ALL.iter().map(|t| t.file_name()).collect();
    assert_eq!(
        files,
        vec![
            "fact_academic_engagement.csv",
            "dim_students.csv",
            "dim_courses.csv",
            "dim_faculty.csv",
            "dim_semesters.csv",
            "dim_date.csv",
        ]
    );
}

#[test]
fn metric_tracks_recorded_values() {
    assert_eq!(Metric::from_option(Some(0.5)), Metric::Recorded(0.5));
    assert_eq!(Metric::from(None), Metric::Unrecorded);
    assert!(Metric::Recorded(0.0).is_recorded());
    assert!(!Metric::Unrecorded.is_recorded());
    assert_eq!(UNRECORDED_MARKER, "Data Unrecorded");
}

#[test]
fn clean_report_serializes_reasons_as_keys() {
    let mut report = CleanReport::new(Entity::FeedbackResponse, 4);
    report.record_drop(DropReason::MissingRequired("Rating"), 1);
    report.record_repair(RepairReason::DefaultFilled("Comments"), 2);
    report.finish(3);

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["entity"], "FeedbackResponse");
    assert_eq!(json["rows_out"], 3);
    assert_eq!(json["dropped"]["missing Rating"], 1);
    assert_eq!(json["repaired"]["default Comments"], 2);
}
