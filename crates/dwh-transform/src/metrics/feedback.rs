use std::collections::HashMap;

use dwh_model::Entity;
use dwh_model::columns::{COURSE_ID, RATING, STUDENT_ID};

use crate::error::Result;
use crate::tables::CleanedTables;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRow {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackDeviation {
    pub student_id: Option<String>,
    pub course_id: String,
    /// Rating minus the course's mean rating.
    pub deviation: f64,
}

/// Signed distance of each rating from its course's mean rating.
///
/// Every course average is computed before any deviation, so the output
/// does not depend on row order. Rows without a course or rating are skipped.
pub fn feedback_deviation(rows: &[FeedbackRow]) -> Vec<FeedbackDeviation> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for row in rows {
        if let (Some(course), Some(rating)) = (row.course_id.as_deref(), row.rating) {
            let entry = sums.entry(course).or_insert((0.0, 0));
            entry.0 += rating;
            entry.1 += 1;
        }
    }
    let averages: HashMap<&str, f64> = sums
        .into_iter()
        .map(|(course, (sum, count))| (course, sum / count as f64))
        .collect();

    rows.iter()
        .filter_map(|row| {
            let course = row.course_id.as_deref()?;
            let rating = row.rating?;
            let average = averages.get(course)?;
            Some(FeedbackDeviation {
                student_id: row.student_id.clone(),
                course_id: course.to_string(),
                deviation: rating - average,
            })
        })
        .collect()
}

pub(crate) fn feedback_rows(tables: &CleanedTables) -> Result<Vec<FeedbackRow>> {
    let entity = Entity::FeedbackResponse;
    let students = tables.text(entity, STUDENT_ID)?;
    let courses = tables.text(entity, COURSE_ID)?;
    let ratings = tables.numbers(entity, RATING)?;
    Ok(students
        .into_iter()
        .zip(courses)
        .zip(ratings)
        .map(|((student_id, course_id), rating)| FeedbackRow {
            student_id,
            course_id,
            rating,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(student: &str, course: &str, rating: f64) -> FeedbackRow {
        FeedbackRow {
            student_id: Some(student.to_string()),
            course_id: Some(course.to_string()),
            rating: Some(rating),
        }
    }

    #[test]
    fn test_deviation_from_course_mean() {
        let rows = [row("S1", "C1", 3.0), row("S2", "C1", 4.0), row("S3", "C1", 5.0)];
        let deviations: Vec<f64> = feedback_deviation(&rows)
            .into_iter()
            .map(|d| d.deviation)
            .collect();
        assert_eq!(deviations, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_courses_are_independent() {
        let rows = [row("S1", "C1", 2.0), row("S1", "C2", 5.0), row("S2", "C1", 4.0)];
        let deviations: Vec<(String, f64)> = feedback_deviation(&rows)
            .into_iter()
            .map(|d| (d.course_id, d.deviation))
            .collect();
        assert_eq!(
            deviations,
            vec![
                ("C1".to_string(), -1.0),
                ("C2".to_string(), 0.0),
                ("C1".to_string(), 1.0)
            ]
        );
    }
}
