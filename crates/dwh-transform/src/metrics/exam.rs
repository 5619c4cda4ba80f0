use std::collections::HashMap;

use dwh_model::Entity;
use dwh_model::columns::{COURSE_ID, SCORE, STUDENT_ID};

use super::{PairKey, pair_key};
use crate::error::Result;
use crate::tables::CleanedTables;

#[derive(Debug, Clone, PartialEq)]
pub struct ExamScoreRow {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub score: Option<f64>,
}

/// One exam row carrying its (student, course) mean score.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamScoreAverage {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    /// Missing when the pair has no scored exams.
    pub average: Option<f64>,
}

/// Mean score per (student, course), broadcast back onto every exam row.
///
/// The output has one row per input row, in input order, so a pair with
/// three exams contributes three identical averages to later joins. Rows
/// without a score do not count towards the mean but still receive it.
pub fn exam_score_average(rows: &[ExamScoreRow]) -> Vec<ExamScoreAverage> {
    let mut sums: HashMap<PairKey, (f64, usize)> = HashMap::new();
    for row in rows {
        if let Some(key) = pair_key(row.student_id.as_ref(), row.course_id.as_ref())
            && let Some(score) = row.score
        {
            let entry = sums.entry(key).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }

    rows.iter()
        .map(|row| {
            let average = pair_key(row.student_id.as_ref(), row.course_id.as_ref())
                .and_then(|key| sums.get(&key))
                .map(|(sum, count)| sum / *count as f64);
            ExamScoreAverage {
                student_id: row.student_id.clone(),
                course_id: row.course_id.clone(),
                average,
            }
        })
        .collect()
}

pub(crate) fn exam_rows(tables: &CleanedTables) -> Result<Vec<ExamScoreRow>> {
    let entity = Entity::ExamResult;
    let students = tables.text(entity, STUDENT_ID)?;
    let courses = tables.text(entity, COURSE_ID)?;
    let scores = tables.numbers(entity, SCORE)?;
    Ok(students
        .into_iter()
        .zip(courses)
        .zip(scores)
        .map(|((student_id, course_id), score)| ExamScoreRow {
            student_id,
            course_id,
            score,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(student: &str, course: &str, score: Option<f64>) -> ExamScoreRow {
        ExamScoreRow {
            student_id: Some(student.to_string()),
            course_id: Some(course.to_string()),
            score,
        }
    }

    #[test]
    fn test_average_is_broadcast_per_row() {
        let rows = [
            row("S1", "C1", Some(80.0)),
            row("S2", "C1", Some(50.0)),
            row("S1", "C1", Some(90.0)),
            row("S1", "C1", None),
        ];
        let averages: Vec<Option<f64>> =
            exam_score_average(&rows).into_iter().map(|a| a.average).collect();
        assert_eq!(averages, vec![Some(85.0), Some(50.0), Some(85.0), Some(85.0)]);
    }

    #[test]
    fn test_unscored_pair_has_no_average() {
        let rows = [row("S1", "C1", None)];
        assert_eq!(exam_score_average(&rows)[0].average, None);
    }
}
