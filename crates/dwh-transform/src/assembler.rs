//! Star-schema assembly.
//!
//! The fact grain is built by a chain of joins:
//!
//! 1. enrollments ⋈ faculty assignments on (CourseID, SemesterID)
//! 2. ⋈ students on StudentID
//! 3. DateID looked up from the admission date dimension
//! 4. ⟕ exam averages, attendance rates, feedback deviations on (StudentID, CourseID)
//! 5. ⟕ dropout log on StudentID, ⟕ semesters on SemesterID
//!
//! Left joins with several matches multiply the row; that is the intended
//! grain, not an error. Counts along the chain land in the [`AssemblyReport`].

use chrono::NaiveDate;
use dwh_model::columns::{
    ADMISSION_DATE, COURSE_ID, DROPOUT_DATE, END_DATE, FACULTY_ID, SEMESTER_ID, STUDENT_ID,
};
use dwh_model::{AssemblyReport, Entity, FactRow, Metric};
use tracing::{debug, info, info_span};

use crate::dim_date::{build_dim_date, date_ids};
use crate::error::Result;
use crate::join::KeyIndex;
use crate::mart::{DataMart, dimension_tables};
use crate::metrics::{
    PairKey, attendance_rate, attendance_rows, exam_rows, exam_score_average, feedback_deviation,
    feedback_rows, pair_key,
};
use crate::tables::CleanedTables;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A fact row before metrics: indices into enrollments, assignments and students.
struct Base {
    enrollment: usize,
    assignment: usize,
    student: usize,
}

/// Builds the fact table and every dimension from the cleaned tables.
pub fn assemble(tables: &CleanedTables) -> Result<DataMart> {
    let span = info_span!("assemble");
    let _guard = span.enter();
    let mut report = AssemblyReport::default();

    // Step 1: enrollment x assignment spine.
    let enroll_students = tables.text(Entity::Enrollment, STUDENT_ID)?;
    let enroll_courses = tables.text(Entity::Enrollment, COURSE_ID)?;
    let enroll_semesters = tables.text(Entity::Enrollment, SEMESTER_ID)?;
    let assign_faculty = tables.text(Entity::FacultyCourseAssignment, FACULTY_ID)?;
    let assign_courses = tables.text(Entity::FacultyCourseAssignment, COURSE_ID)?;
    let assign_semesters = tables.text(Entity::FacultyCourseAssignment, SEMESTER_ID)?;
    report.enrollment_rows = enroll_students.len();
    report.assignment_rows = assign_faculty.len();

    let assignment_index = KeyIndex::build(
        assign_courses
            .iter()
            .zip(&assign_semesters)
            .map(|(course, semester)| Some((course.clone()?, semester.clone()?))),
    );
    let mut spine: Vec<(usize, usize)> = Vec::new();
    for (enrollment, (course, semester)) in enroll_courses.iter().zip(&enroll_semesters).enumerate()
    {
        let key = course.clone().zip(semester.clone());
        for &assignment in assignment_index.matches(key.as_ref()) {
            spine.push((enrollment, assignment));
        }
    }
    report.spine_rows = spine.len();

    // Step 2: students.
    let student_ids = tables.text(Entity::Student, STUDENT_ID)?;
    let admission_dates = tables.text(Entity::Student, ADMISSION_DATE)?;
    let student_index = KeyIndex::build(student_ids.iter().cloned());
    let bases: Vec<Base> = spine
        .into_iter()
        .flat_map(|(enrollment, assignment)| {
            student_index
                .matches(enroll_students[enrollment].as_ref())
                .iter()
                .map(move |&student| Base {
                    enrollment,
                    assignment,
                    student,
                })
        })
        .collect();
    report.student_joined_rows = bases.len();

    // Step 3: date dimension over every cleaned student.
    let dim_date = build_dim_date(admission_dates.iter().map(Option::as_deref));
    report.date_dimension_rows = dim_date.len();
    let date_lookup = date_ids(&dim_date);

    // Step 4: metrics.
    let exams = exam_score_average(&exam_rows(tables)?);
    let attendance = attendance_rate(&attendance_rows(tables)?);
    let feedback = feedback_deviation(&feedback_rows(tables)?);
    debug!(
        exam_rows = exams.len(),
        attendance_pairs = attendance.len(),
        feedback_rows = feedback.len(),
        "derived metrics"
    );
    let exam_index = KeyIndex::build(
        exams
            .iter()
            .map(|e| pair_key(e.student_id.as_ref(), e.course_id.as_ref())),
    );
    let attendance_index = KeyIndex::build(
        attendance
            .iter()
            .map(|a| Some((a.student_id.clone(), a.course_id.clone()))),
    );
    let feedback_index = KeyIndex::build(
        feedback
            .iter()
            .map(|f| pair_key(f.student_id.as_ref(), Some(&f.course_id))),
    );

    // Step 5: dropout log and semesters.
    let dropout_students = tables.text(Entity::DropoutLog, STUDENT_ID)?;
    let dropout_dates = parse_dates(tables.text(Entity::DropoutLog, DROPOUT_DATE)?);
    let semester_ids = tables.text(Entity::Semester, SEMESTER_ID)?;
    let semester_ends = parse_dates(tables.text(Entity::Semester, END_DATE)?);
    let dropout_index = KeyIndex::build(dropout_students);
    let semester_index = KeyIndex::build(semester_ids);

    let mut fact = Vec::new();
    for base in &bases {
        let student_id = enroll_students[base.enrollment].clone().unwrap_or_default();
        let course_id = enroll_courses[base.enrollment].clone().unwrap_or_default();
        let semester_id = enroll_semesters[base.enrollment].clone().unwrap_or_default();
        let faculty_id = assign_faculty[base.assignment].clone();
        let date_id = admission_dates[base.student]
            .as_deref()
            .and_then(|date| date_lookup.get(date).copied());
        let pair: Option<PairKey> = Some((student_id.clone(), course_id.clone()));

        for exam in exam_index.left(pair.as_ref()) {
            let exam_average = exam.and_then(|idx| exams[idx].average);
            for rate in attendance_index.left(pair.as_ref()) {
                let attendance_rate = Metric::from(rate.map(|idx| attendance[idx].rate));
                for deviation in feedback_index.left(pair.as_ref()) {
                    let feedback_deviation =
                        Metric::from(deviation.map(|idx| feedback[idx].deviation));
                    for dropout in dropout_index.left(Some(&student_id)) {
                        let dropout_date = dropout.and_then(|idx| dropout_dates[idx]);
                        for semester in semester_index.left(Some(&semester_id)) {
                            let end_date = semester.and_then(|idx| semester_ends[idx]);
                            fact.push(FactRow {
                                fact_id: 0,
                                student_id: student_id.clone(),
                                course_id: course_id.clone(),
                                faculty_id: faculty_id.clone(),
                                semester_id: semester_id.clone(),
                                date_id,
                                exam_score_avg: exam_average.unwrap_or(0.0),
                                attendance_rate,
                                feedback_deviation,
                                dropout_flag: dropout_flag(dropout_date, end_date),
                            });
                            if exam_average.is_none() {
                                report.exam_zero_filled += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    // Steps 6-7: counts and surrogate keys in join-chain order.
    for (row, fact_id) in fact.iter_mut().zip(1u64..) {
        row.fact_id = fact_id;
    }
    report.fact_rows = fact.len();
    report.missing_date_id = fact.iter().filter(|r| r.date_id.is_none()).count();
    report.attendance_unrecorded = fact.iter().filter(|r| !r.attendance_rate.is_recorded()).count();
    report.feedback_unrecorded = fact
        .iter()
        .filter(|r| !r.feedback_deviation.is_recorded())
        .count();
    report.dropout_flagged = fact.iter().filter(|r| r.dropout_flag == 1).count();

    // Step 8: dimensions.
    let (students, courses, faculty, semesters) = dimension_tables(tables)?;

    info!(
        spine_rows = report.spine_rows,
        fact_rows = report.fact_rows,
        date_rows = report.date_dimension_rows,
        "assembled data mart"
    );

    Ok(DataMart {
        fact,
        dim_date,
        students,
        courses,
        faculty,
        semesters,
        report,
    })
}

fn parse_dates(values: Vec<Option<String>>) -> Vec<Option<NaiveDate>> {
    values
        .into_iter()
        .map(|v| v.and_then(|s| NaiveDate::parse_from_str(&s, ISO_DATE_FORMAT).ok()))
        .collect()
}

/// 1 when the student left after the semester ended; 0 otherwise or when either date is unknown.
pub fn dropout_flag(dropout_date: Option<NaiveDate>, semester_end: Option<NaiveDate>) -> u8 {
    match (dropout_date, semester_end) {
        (Some(dropout), Some(end)) if dropout > end => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
    }

    #[test]
    fn test_dropout_flag() {
        assert_eq!(dropout_flag(date("2023-06-01"), date("2023-05-10")), 1);
        assert_eq!(dropout_flag(date("2023-05-10"), date("2023-05-10")), 0);
        assert_eq!(dropout_flag(None, date("2023-05-10")), 0);
        assert_eq!(dropout_flag(date("2023-06-01"), None), 0);
    }
}
