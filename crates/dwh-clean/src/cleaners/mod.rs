//! One cleaner per raw entity.
//!
//! | Entity | Key operations |
//! |--------|----------------|
//! | AttendanceRecord | Status canonicalization, (student, course, date) dedupe |
//! | Classroom | Capacity validation, nearest-mode ResourceType imputation |
//! | CoursePrerequisite | Self-reference removal |
//! | Course | Title/Type defaults, median Credits repair, CourseID dedupe |
//! | Department | Name default, DepartmentID dedupe |
//! | ExamResult | Negative score clamp, ExamType canonicalization |
//! | ExamSchedule | Type default and title case, `INVALID_` sentinel rows dropped |
//! | Faculty | Specialization default, FacultyID dedupe |
//! | FacultyCourseAssignment | Role canonicalization |
//! | FeedbackResponse | Rating required, Comments default, SemesterID format |
//! | Grade | ScoreRange format |
//! | Semester | Term canonicalization, date parsing |
//! | Enrollment | SemesterID format, EnrollmentStatus canonicalization |
//! | DropoutLog | Reason default, LastSemester format |
//! | Student | Gender canonicalization, day-first DOB, StudentID dedupe |

mod academic;
mod attendance;
mod classroom;
mod common;
mod course;
mod enrollment;
mod exam;
mod faculty;
mod feedback;
mod student;

pub(crate) use academic::{DepartmentCleaner, GradeCleaner, SemesterCleaner};
pub(crate) use attendance::AttendanceCleaner;
pub(crate) use classroom::ClassroomCleaner;
pub(crate) use course::{CourseCleaner, CoursePrerequisiteCleaner};
pub(crate) use enrollment::{DropoutLogCleaner, EnrollmentCleaner};
pub(crate) use exam::{ExamResultCleaner, ExamScheduleCleaner};
pub(crate) use faculty::{FacultyAssignmentCleaner, FacultyCleaner};
pub(crate) use feedback::FeedbackCleaner;
pub(crate) use student::StudentCleaner;
