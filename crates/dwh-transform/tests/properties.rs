//! Property tests for metric derivation and fact keys.

use dwh_ingest::string_column;
use dwh_model::Entity;
use dwh_transform::metrics::{AttendanceRow, attendance_rate};
use dwh_transform::{CleanedTables, assemble};
use polars::prelude::DataFrame;
use proptest::prelude::*;

fn text_frame(columns: Vec<(&str, Vec<String>)>) -> DataFrame {
    DataFrame::new(
        columns
            .into_iter()
            .map(|(name, values)| string_column(name, values.into_iter().map(Some).collect()))
            .collect(),
    )
    .expect("build frame")
}

fn empty(names: &[&str]) -> DataFrame {
    text_frame(names.iter().map(|name| (*name, Vec::new())).collect())
}

proptest! {
    #[test]
    fn attendance_rate_stays_in_unit_interval(
        marks in prop::collection::vec((0u8..3, 0u8..3, "(Present|Absent|Late|Excused)"), 0..40)
    ) {
        let rows: Vec<AttendanceRow> = marks
            .into_iter()
            .map(|(student, course, status)| AttendanceRow {
                student_id: Some(format!("S{student}")),
                course_id: Some(format!("C{course}")),
                status: Some(status),
            })
            .collect();
        for rate in attendance_rate(&rows) {
            prop_assert!((0.0..=1.0).contains(&rate.rate));
        }
    }

    #[test]
    fn fact_ids_are_dense(enrollments in prop::collection::vec((0u8..4, 0u8..3), 0..30)) {
        let students: Vec<String> = (0..4).map(|i| format!("S{i}")).collect();
        let courses: Vec<String> = (0..3).map(|i| format!("C{i}")).collect();

        let mut tables = CleanedTables::new();
        tables.insert(
            Entity::Student,
            text_frame(vec![
                ("StudentID", students),
                ("AdmissionDate", vec!["2022-09-01".to_string(); 4]),
                ("DepartmentID", vec!["D1".to_string(); 4]),
            ]),
        );
        tables.insert(
            Entity::Course,
            text_frame(vec![
                ("CourseID", courses.clone()),
                ("DepartmentID", vec!["D1".to_string(); 3]),
            ]),
        );
        tables.insert(
            Entity::Faculty,
            text_frame(vec![
                ("FacultyID", vec!["F1".to_string()]),
                ("DepartmentID", vec!["D1".to_string()]),
            ]),
        );
        tables.insert(
            Entity::Semester,
            text_frame(vec![
                ("SemesterID", vec!["SEM1".to_string()]),
                ("EndDate", vec!["2023-05-10".to_string()]),
            ]),
        );
        tables.insert(
            Entity::FacultyCourseAssignment,
            text_frame(vec![
                ("FacultyID", vec!["F1".to_string(); 3]),
                ("CourseID", courses),
                ("SemesterID", vec!["SEM1".to_string(); 3]),
            ]),
        );
        tables.insert(
            Entity::Enrollment,
            text_frame(vec![
                ("StudentID", enrollments.iter().map(|(s, _)| format!("S{s}")).collect()),
                ("CourseID", enrollments.iter().map(|(_, c)| format!("C{c}")).collect()),
                ("SemesterID", vec!["SEM1".to_string(); enrollments.len()]),
            ]),
        );
        tables.insert(Entity::ExamResult, empty(&["StudentID", "CourseID", "Score"]));
        tables.insert(Entity::AttendanceRecord, empty(&["StudentID", "CourseID", "Status"]));
        tables.insert(Entity::FeedbackResponse, empty(&["StudentID", "CourseID", "Rating"]));
        tables.insert(Entity::DropoutLog, empty(&["StudentID", "DropoutDate"]));

        let mart = assemble(&tables).expect("assemble");
        prop_assert_eq!(mart.fact.len(), enrollments.len());
        for (row, expected) in mart.fact.iter().zip(1u64..) {
            prop_assert_eq!(row.fact_id, expected);
            prop_assert_eq!(row.date_id, Some(1));
        }
    }
}
