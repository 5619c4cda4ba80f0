//! Per-(student, course) engagement metrics.
//!
//! Each deriver takes plain rows pulled from a cleaned table and returns
//! plain rows keyed for the assembler's left joins. Rows missing a key
//! field never form or join a group.

mod attendance;
mod exam;
mod feedback;

pub use attendance::{AttendanceRate, AttendanceRow, attendance_rate};
pub use exam::{ExamScoreAverage, ExamScoreRow, exam_score_average};
pub use feedback::{FeedbackDeviation, FeedbackRow, feedback_deviation};

pub(crate) use attendance::attendance_rows;
pub(crate) use exam::exam_rows;
pub(crate) use feedback::feedback_rows;

/// Join key shared by every metric: `(StudentID, CourseID)`.
pub type PairKey = (String, String);

pub(crate) fn pair_key(student_id: Option<&String>, course_id: Option<&String>) -> Option<PairKey> {
    Some((student_id?.clone(), course_id?.clone()))
}
