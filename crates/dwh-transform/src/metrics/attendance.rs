use std::collections::HashMap;

use dwh_model::Entity;
use dwh_model::columns::{COURSE_ID, STATUS, STUDENT_ID};

use super::{PairKey, pair_key};
use crate::error::Result;
use crate::tables::CleanedTables;

/// Statuses that count as attending.
const ATTENDED: &[&str] = &["PRESENT", "LATE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRate {
    pub student_id: String,
    pub course_id: String,
    /// Attended sessions over recorded sessions, in `[0, 1]`.
    pub rate: f64,
}

/// Share of sessions marked PRESENT or LATE per (student, course).
///
/// Groups are emitted in order of first appearance. Pairs without any
/// attendance rows are absent, not zero.
pub fn attendance_rate(rows: &[AttendanceRow]) -> Vec<AttendanceRate> {
    let mut order: Vec<PairKey> = Vec::new();
    let mut counts: HashMap<PairKey, (usize, usize)> = HashMap::new();

    for row in rows {
        let Some(key) = pair_key(row.student_id.as_ref(), row.course_id.as_ref()) else {
            continue;
        };
        let attended = row
            .status
            .as_deref()
            .map(|s| s.trim().to_uppercase())
            .is_some_and(|s| ATTENDED.contains(&s.as_str()));
        let entry = counts.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (0, 0)
        });
        entry.1 += 1;
        if attended {
            entry.0 += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|key| {
            let (attended, total) = counts.get(&key).copied()?;
            let (student_id, course_id) = key;
            Some(AttendanceRate {
                student_id,
                course_id,
                rate: attended as f64 / total as f64,
            })
        })
        .collect()
}

pub(crate) fn attendance_rows(tables: &CleanedTables) -> Result<Vec<AttendanceRow>> {
    let entity = Entity::AttendanceRecord;
    let students = tables.text(entity, STUDENT_ID)?;
    let courses = tables.text(entity, COURSE_ID)?;
    let statuses = tables.text(entity, STATUS)?;
    Ok(students
        .into_iter()
        .zip(courses)
        .zip(statuses)
        .map(|((student_id, course_id), status)| AttendanceRow {
            student_id,
            course_id,
            status,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(student: &str, course: &str, status: &str) -> AttendanceRow {
        AttendanceRow {
            student_id: Some(student.to_string()),
            course_id: Some(course.to_string()),
            status: Some(status.to_string()),
        }
    }

    #[test]
    fn test_present_and_late_count_as_attended() {
        let rows = [
            row("S1", "C1", "PRESENT"),
            row("S1", "C1", "ABSENT"),
            row("S1", "C1", "late"),
            row("S1", "C1", "ABSENT"),
        ];
        let rates = attendance_rate(&rows);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].rate, 0.5);
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let mut missing = row("S9", "C9", "PRESENT");
        missing.course_id = None;
        let rows = [
            row("S2", "C1", "ABSENT"),
            row("S1", "C1", "PRESENT"),
            missing,
            row("S2", "C1", "UNKNOWN"),
        ];
        let rates = attendance_rate(&rows);
        let keys: Vec<(&str, f64)> = rates
            .iter()
            .map(|r| (r.student_id.as_str(), r.rate))
            .collect();
        assert_eq!(keys, vec![("S2", 0.0), ("S1", 1.0)]);
    }
}
