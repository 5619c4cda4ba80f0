//! Star-schema output tables.

use std::fmt;

use serde::Serialize;

use crate::metric::Metric;

/// Output tables produced by the dimensional assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MartTable {
    FactAcademicEngagement,
    Students,
    Courses,
    Faculty,
    Semesters,
    Date,
}

impl MartTable {
    pub const ALL: [MartTable; 6] = [
        MartTable::FactAcademicEngagement,
        MartTable::Students,
        MartTable::Courses,
        MartTable::Faculty,
        MartTable::Semesters,
        MartTable::Date,
    ];

    /// Warehouse table name, also the output file stem.
    pub fn table_name(self) -> &'static str {
        match self {
            MartTable::FactAcademicEngagement => "fact_academic_engagement",
            MartTable::Students => "dim_students",
            MartTable::Courses => "dim_courses",
            MartTable::Faculty => "dim_faculty",
            MartTable::Semesters => "dim_semesters",
            MartTable::Date => "dim_date",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.table_name())
    }

    pub fn is_fact(self) -> bool {
        matches!(self, MartTable::FactAcademicEngagement)
    }
}

impl fmt::Display for MartTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// One row of `fact_academic_engagement`.
#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    pub fact_id: u64,
    pub student_id: String,
    pub course_id: String,
    /// Taken from the assignment row; may be missing in the source.
    pub faculty_id: Option<String>,
    pub semester_id: String,
    /// Missing when the student has no parseable admission date.
    pub date_id: Option<u32>,
    /// Zero when the pair has no exam results.
    pub exam_score_avg: f64,
    pub attendance_rate: Metric,
    pub feedback_deviation: Metric,
    pub dropout_flag: u8,
}

/// One row of `dim_date`, keyed by admission date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimDateRow {
    pub date_id: u32,
    /// ISO `YYYY-MM-DD`; used for the key join, not written to the dimension file.
    pub admission_date: String,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}
