//! Column names shared by raw, cleaned and mart tables.
//!
//! The upstream extractor delivers these names verbatim; a renamed column is
//! reported as missing rather than guessed.

pub const STUDENT_ID: &str = "StudentID";
pub const COURSE_ID: &str = "CourseID";
pub const FACULTY_ID: &str = "FacultyID";
pub const SEMESTER_ID: &str = "SemesterID";
pub const DEPARTMENT_ID: &str = "DepartmentID";
pub const ROOM_ID: &str = "RoomID";
pub const EXAM_ID: &str = "ExamID";
pub const GRADE_ID: &str = "GradeID";
pub const PREREQUISITE_COURSE_ID: &str = "PrerequisiteCourseID";

pub const NAME: &str = "Name";
pub const GENDER: &str = "Gender";
pub const DOB: &str = "DOB";
pub const NATIONALITY: &str = "Nationality";
pub const ADMISSION_DATE: &str = "AdmissionDate";

pub const TITLE: &str = "Title";
pub const CREDITS: &str = "Credits";
pub const TYPE: &str = "Type";

pub const HIRE_DATE: &str = "HireDate";
pub const SPECIALIZATION: &str = "Specialization";

pub const DEPARTMENT_NAME: &str = "DepartmentName";
pub const LOCATION: &str = "Location";

pub const ACADEMIC_YEAR: &str = "AcademicYear";
pub const TERM: &str = "Term";
pub const START_DATE: &str = "StartDate";
pub const END_DATE: &str = "EndDate";

pub const BUILDING_NAME: &str = "BuildingName";
pub const CAPACITY: &str = "Capacity";
pub const RESOURCE_TYPE: &str = "ResourceType";

pub const ENROLLMENT_STATUS: &str = "EnrollmentStatus";
pub const ROLE: &str = "Role";

pub const DATE: &str = "Date";
pub const STATUS: &str = "Status";

pub const SCORE: &str = "Score";
pub const EXAM_TYPE: &str = "ExamType";
pub const SCHEDULED_DATE: &str = "ScheduledDate";

pub const RATING: &str = "Rating";
pub const COMMENTS: &str = "Comments";

pub const SCORE_RANGE: &str = "ScoreRange";
pub const GRADE: &str = "Grade";
pub const GPA: &str = "GPA";

pub const DROPOUT_DATE: &str = "DropoutDate";
pub const REASON: &str = "Reason";
pub const LAST_SEMESTER: &str = "LastSemester";

// Mart-only columns
pub const FACT_ID: &str = "FactID";
pub const DATE_ID: &str = "DateID";
pub const EXAM_SCORE_AVG: &str = "ExamScoreAvg";
pub const ATTENDANCE_RATE: &str = "AttendanceRate";
pub const FEEDBACK_DEVIATION: &str = "FeedbackDeviation";
pub const DROPOUT_FLAG: &str = "DropoutFlag";
pub const ADMISSION_DAY: &str = "AdmissionDay";
pub const ADMISSION_MONTH: &str = "AdmissionMonth";
pub const ADMISSION_YEAR: &str = "AdmissionYear";
