//! Catalogue of the raw university entities.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::columns::{
    ACADEMIC_YEAR, ADMISSION_DATE, BUILDING_NAME, CAPACITY, COMMENTS, COURSE_ID, CREDITS, DATE,
    DEPARTMENT_ID, DEPARTMENT_NAME, DOB, DROPOUT_DATE, END_DATE, ENROLLMENT_STATUS, EXAM_ID,
    EXAM_TYPE, FACULTY_ID, GENDER, GPA, GRADE, GRADE_ID, HIRE_DATE, LAST_SEMESTER, LOCATION, NAME,
    NATIONALITY, PREREQUISITE_COURSE_ID, RATING, REASON, RESOURCE_TYPE, ROLE, ROOM_ID,
    SCHEDULED_DATE, SCORE, SCORE_RANGE, SEMESTER_ID, SPECIALIZATION, START_DATE, STATUS,
    STUDENT_ID, TERM, TITLE, TYPE,
};
use crate::error::ModelError;

/// One raw entity table handed over by the extractor.
///
/// Variants are ordered by their file stem, which is also the order the
/// cleaning stage processes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Entity {
    AttendanceRecord,
    Classroom,
    CoursePrerequisite,
    Course,
    Department,
    ExamResult,
    ExamSchedule,
    Faculty,
    FacultyCourseAssignment,
    FeedbackResponse,
    Grade,
    Semester,
    Enrollment,
    DropoutLog,
    Student,
}

impl Entity {
    pub const ALL: [Entity; 15] = [
        Entity::AttendanceRecord,
        Entity::Classroom,
        Entity::CoursePrerequisite,
        Entity::Course,
        Entity::Department,
        Entity::ExamResult,
        Entity::ExamSchedule,
        Entity::Faculty,
        Entity::FacultyCourseAssignment,
        Entity::FeedbackResponse,
        Entity::Grade,
        Entity::Semester,
        Entity::Enrollment,
        Entity::DropoutLog,
        Entity::Student,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Entity::AttendanceRecord => "AttendanceRecord",
            Entity::Classroom => "Classroom",
            Entity::CoursePrerequisite => "CoursePrerequisite",
            Entity::Course => "Course",
            Entity::Department => "Department",
            Entity::ExamResult => "ExamResult",
            Entity::ExamSchedule => "ExamSchedule",
            Entity::Faculty => "Faculty",
            Entity::FacultyCourseAssignment => "FacultyCourseAssignment",
            Entity::FeedbackResponse => "FeedbackResponse",
            Entity::Grade => "Grade",
            Entity::Semester => "Semester",
            Entity::Enrollment => "Enrollment",
            Entity::DropoutLog => "DropoutLog",
            Entity::Student => "Student",
        }
    }

    /// File stem shared by the raw and cleaned files (e.g. `students`).
    pub fn file_stem(self) -> &'static str {
        match self {
            Entity::AttendanceRecord => "attendance_records",
            Entity::Classroom => "classrooms",
            Entity::CoursePrerequisite => "course_prerequisites",
            Entity::Course => "courses",
            Entity::Department => "departments",
            Entity::ExamResult => "exam_results",
            Entity::ExamSchedule => "exam_schedule",
            Entity::Faculty => "faculties",
            Entity::FacultyCourseAssignment => "faculty_course_assignments",
            Entity::FeedbackResponse => "feedback_responses",
            Entity::Grade => "grades",
            Entity::Semester => "semesters",
            Entity::Enrollment => "student_course_enrollments",
            Entity::DropoutLog => "student_dropout_log",
            Entity::Student => "students",
        }
    }

    pub fn raw_file_name(self) -> String {
        format!("{}_raw.csv", self.file_stem())
    }

    pub fn clean_file_name(self) -> String {
        format!("{}_clean.csv", self.file_stem())
    }

    pub fn description(self) -> &'static str {
        match self {
            Entity::AttendanceRecord => "Per-session attendance marks",
            Entity::Classroom => "Rooms with capacity and resource type",
            Entity::CoursePrerequisite => "Course prerequisite pairs",
            Entity::Course => "Course catalogue",
            Entity::Department => "Academic departments",
            Entity::ExamResult => "Exam scores per student and course",
            Entity::ExamSchedule => "Scheduled exams with room and invigilator",
            Entity::Faculty => "Faculty members",
            Entity::FacultyCourseAssignment => "Faculty teaching assignments per semester",
            Entity::FeedbackResponse => "Student course feedback ratings",
            Entity::Grade => "Grade bands and GPA points",
            Entity::Semester => "Academic terms with start and end dates",
            Entity::Enrollment => "Student course enrollments per semester",
            Entity::DropoutLog => "Student dropout events",
            Entity::Student => "Student register",
        }
    }

    /// Columns the cleaner for this entity reads; missing any of them is fatal.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Entity::AttendanceRecord => &[STUDENT_ID, COURSE_ID, DATE, STATUS],
            Entity::Classroom => &[ROOM_ID, BUILDING_NAME, CAPACITY, RESOURCE_TYPE],
            Entity::CoursePrerequisite => &[COURSE_ID, PREREQUISITE_COURSE_ID],
            Entity::Course => &[COURSE_ID, TITLE, CREDITS, TYPE, DEPARTMENT_ID],
            Entity::Department => &[DEPARTMENT_ID, DEPARTMENT_NAME, LOCATION],
            Entity::ExamResult => &[STUDENT_ID, COURSE_ID, EXAM_TYPE, SCORE, DATE],
            Entity::ExamSchedule => &[EXAM_ID, COURSE_ID, FACULTY_ID, ROOM_ID, SCHEDULED_DATE, TYPE],
            Entity::Faculty => &[FACULTY_ID, NAME, HIRE_DATE, SPECIALIZATION, DEPARTMENT_ID],
            Entity::FacultyCourseAssignment => &[FACULTY_ID, COURSE_ID, SEMESTER_ID, ROLE],
            Entity::FeedbackResponse => {
                &[STUDENT_ID, COURSE_ID, FACULTY_ID, SEMESTER_ID, RATING, COMMENTS]
            }
            Entity::Grade => &[GRADE_ID, SCORE_RANGE, GRADE, GPA],
            Entity::Semester => &[SEMESTER_ID, ACADEMIC_YEAR, TERM, START_DATE, END_DATE],
            Entity::Enrollment => &[STUDENT_ID, COURSE_ID, SEMESTER_ID, ENROLLMENT_STATUS],
            Entity::DropoutLog => &[STUDENT_ID, DROPOUT_DATE, REASON, LAST_SEMESTER],
            Entity::Student => &[
                STUDENT_ID,
                NAME,
                GENDER,
                DOB,
                NATIONALITY,
                ADMISSION_DATE,
                DEPARTMENT_ID,
            ],
        }
    }

    /// Declared natural key; duplicates on it collapse to the first row.
    ///
    /// Empty for entities that only drop exact duplicate rows.
    pub fn natural_key(self) -> &'static [&'static str] {
        match self {
            Entity::AttendanceRecord => &[STUDENT_ID, COURSE_ID, DATE],
            Entity::Course => &[COURSE_ID],
            Entity::Department => &[DEPARTMENT_ID],
            Entity::Faculty => &[FACULTY_ID],
            Entity::Student => &[STUDENT_ID],
            _ => &[],
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entity {
    type Err = ModelError;

    /// Accepts the entity name or its file stem, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Entity::ALL
            .into_iter()
            .find(|entity| {
                entity.name().eq_ignore_ascii_case(needle)
                    || entity.file_stem().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ModelError::UnknownEntity(needle.to_string()))
    }
}
