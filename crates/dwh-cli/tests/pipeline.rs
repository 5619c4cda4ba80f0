//! End-to-end tests for the clean and transform stages.

use std::fs;
use std::path::Path;

use dwh_cli::pipeline::{clean_stage, load_cleaned, run_paths, transform_stage, write_report};
use dwh_cli::types::{RunMode, RunReport};
use dwh_model::{Entity, MartTable, PipelinePaths};
use tempfile::TempDir;

const RAW_FILES: &[(&str, &str)] = &[
    (
        "attendance_records_raw.csv",
        "StudentID,CourseID,Date,Status\n\
         S1,C1,2023-02-01,Present\n\
         S1,C1,2023-02-08,absent\n\
         S1,C2,2023-02-01,L\n",
    ),
    (
        "classrooms_raw.csv",
        "RoomID,BuildingName,Capacity,ResourceType\nR1,Main,30,Lab\n",
    ),
    (
        "course_prerequisites_raw.csv",
        "CourseID,PrerequisiteCourseID\nC2,C1\nC1,C1\n",
    ),
    (
        "courses_raw.csv",
        "CourseID,Title,Credits,Type,DepartmentID\n\
         C1,Algebra,3,Core,D1\n\
         C2,Optics,-1,Elective,D2\n",
    ),
    (
        "departments_raw.csv",
        "DepartmentID,DepartmentName,Location\nD1,Mathematics,North\nD2,Physics,South\n",
    ),
    (
        "exam_results_raw.csv",
        "StudentID,CourseID,ExamType,Score,Date\n\
         S1,C1,final,80,2023-05-01\n\
         S1,C2,mid,70,2023-03-02\n",
    ),
    (
        "exam_schedule_raw.csv",
        "ExamID,CourseID,FacultyID,RoomID,ScheduledDate,Type\n\
         E1,C1,F1,R1,2023-05-01,final exam\n\
         E2,C2,INVALID_F,R1,2023-05-02,final exam\n",
    ),
    (
        "faculties_raw.csv",
        "FacultyID,Name,HireDate,Specialization,DepartmentID\n\
         F1,Noether,2010-01-01,Algebra,D1\n\
         F2,Fresnel,2012-03-01,,D2\n",
    ),
    (
        "faculty_course_assignments_raw.csv",
        "FacultyID,CourseID,SemesterID,Role\nF1,C1,SEM1,instructor\nF2,C2,SEM1,ta\n",
    ),
    (
        "feedback_responses_raw.csv",
        "StudentID,CourseID,FacultyID,SemesterID,Rating,Comments\n\
         S1,C1,F1,SEM1,3,ok\n\
         S2,C1,F1,SEM1,5,great\n",
    ),
    (
        "grades_raw.csv",
        "GradeID,ScoreRange,Grade,GPA\nG1,90-100,A,4.0\nG2,bad,B,3.0\n",
    ),
    (
        "semesters_raw.csv",
        "SemesterID,AcademicYear,Term,StartDate,EndDate\nSEM1,2023,sprng,2023-01-10,2023-05-10\n",
    ),
    (
        "student_course_enrollments_raw.csv",
        "StudentID,CourseID,SemesterID,EnrollmentStatus\n\
         S1,C1,SEM1,active\n\
         S2,C1,SEM1,dropped\n\
         S1,C2,SEM1,active\n\
         S1,C2,2023-Spring,active\n",
    ),
    (
        "student_dropout_log_raw.csv",
        "StudentID,DropoutDate,Reason,LastSemester\nS2,2023-06-01,Financial,SEM1\n",
    ),
    (
        "students_raw.csv",
        "StudentID,Name,Gender,DOB,Nationality,AdmissionDate,DepartmentID\n\
         S1,Ada,F,2001-04-03,UK,2021-09-01,D1\n\
         S2,Bo,m,2000-01-31,FR,,D1\n\
         S3,Cy,x,1999-12-12,DE,2020-01-15,D2\n",
    ),
];

const EXPECTED_FACT: &str = "\
FactID,StudentID,CourseID,FacultyID,SemesterID,DateID,ExamScoreAvg,AttendanceRate,FeedbackDeviation,DropoutFlag
1,S1,C1,F1,SEM1,2,80,0.5,-1,0
2,S2,C1,F1,SEM1,,0,Data Unrecorded,1,1
3,S1,C2,F2,SEM1,2,70,1,Data Unrecorded,0
";

fn write_raw(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for (name, contents) in RAW_FILES {
        fs::write(dir.join(name), contents).unwrap();
    }
}

fn setup() -> (TempDir, PipelinePaths) {
    let temp = TempDir::new().unwrap();
    let raw_dir = temp.path().join("extracted");
    write_raw(&raw_dir);
    let paths = PipelinePaths::from_raw_dir(raw_dir);
    (temp, paths)
}

#[test]
fn full_run_writes_cleaned_and_mart_tables() {
    let (_temp, paths) = setup();

    let cleaned = clean_stage(&paths, true).unwrap();
    assert_eq!(cleaned.reports.len(), 15);
    assert!(cleaned.reports.iter().all(|r| r.is_balanced()));
    for entity in Entity::ALL {
        assert!(paths.cleaned_path(entity).exists(), "{entity} not written");
    }

    let stage = transform_stage(&cleaned.tables, &paths, true).unwrap();
    assert_eq!(stage.report.fact_rows, 3);
    for table in MartTable::ALL {
        assert!(paths.mart_path(table).exists(), "{table} not written");
    }

    let fact = fs::read_to_string(paths.mart_path(MartTable::FactAcademicEngagement)).unwrap();
    assert_eq!(fact, EXPECTED_FACT);
    let dim_date = fs::read_to_string(paths.mart_path(MartTable::Date)).unwrap();
    assert_eq!(
        dim_date,
        "DateID,AdmissionDay,AdmissionMonth,AdmissionYear\n1,15,1,2020\n2,1,9,2021\n"
    );
}

#[test]
fn cleaned_tables_reflect_repairs() {
    let (_temp, paths) = setup();
    clean_stage(&paths, true).unwrap();

    let courses = fs::read_to_string(paths.cleaned_path(Entity::Course)).unwrap();
    assert_eq!(
        courses,
        "CourseID,Title,Credits,Type,DepartmentID\nC1,Algebra,3,Core,D1\nC2,Optics,3,Elective,D2\n"
    );
    let prerequisites = fs::read_to_string(paths.cleaned_path(Entity::CoursePrerequisite)).unwrap();
    assert_eq!(prerequisites, "CourseID,PrerequisiteCourseID\nC2,C1\n");
    let semesters = fs::read_to_string(paths.cleaned_path(Entity::Semester)).unwrap();
    assert!(semesters.contains("SEM1,2023,Spring,2023-01-10,2023-05-10"));
}

#[test]
fn transform_from_cleaned_directory_matches_in_memory_run() {
    let (_temp, paths) = setup();
    let cleaned = clean_stage(&paths, true).unwrap();
    transform_stage(&cleaned.tables, &paths, true).unwrap();
    let in_memory = fs::read_to_string(paths.mart_path(MartTable::FactAcademicEngagement)).unwrap();

    let reloaded = load_cleaned(&paths).unwrap();
    transform_stage(&reloaded, &paths, true).unwrap();
    let from_disk = fs::read_to_string(paths.mart_path(MartTable::FactAcademicEngagement)).unwrap();

    assert_eq!(in_memory, from_disk);
}

#[test]
fn cleaned_dir_override_moves_mart_alongside() {
    let temp = TempDir::new().unwrap();
    let raw_dir = temp.path().join("data").join("extracted");
    write_raw(&raw_dir);
    let cleaned_dir = temp.path().join("elsewhere").join("cleaned");
    let paths = run_paths(&raw_dir, Some(&cleaned_dir), None);

    let cleaned = clean_stage(&paths, true).unwrap();
    transform_stage(&cleaned.tables, &paths, true).unwrap();

    let mart_dir = temp.path().join("elsewhere").join("transformed");
    assert_eq!(paths.transformed_dir, mart_dir);
    assert!(mart_dir.join("fact_academic_engagement.csv").exists());
    assert!(!temp.path().join("data").join("transformed").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let (_temp, paths) = setup();
    let cleaned = clean_stage(&paths, false).unwrap();
    let stage = transform_stage(&cleaned.tables, &paths, false).unwrap();

    assert!(!paths.cleaned_dir.exists());
    assert!(!paths.transformed_dir.exists());
    assert!(stage.tables.iter().all(|t| t.path.is_none()));
    assert_eq!(stage.tables[0].rows, 3);
}

#[test]
fn missing_extract_is_reported_by_name() {
    let (_temp, paths) = setup();
    fs::remove_file(paths.raw_path(Entity::Grade)).unwrap();

    let err = clean_stage(&paths, true).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("grades_raw.csv"), "{message}");
    assert!(!paths.cleaned_dir.exists());
}

#[test]
fn run_report_is_written_as_json() {
    let (temp, paths) = setup();
    let cleaned = clean_stage(&paths, false).unwrap();
    let stage = transform_stage(&cleaned.tables, &paths, false).unwrap();

    let mut report = RunReport::new(RunMode::Run, paths, true);
    report.cleaned = cleaned.reports;
    report.assembly = Some(stage.report);
    report.tables = stage.tables;
    assert_eq!(report.fact_rows(), Some(3));

    let path = temp.path().join("reports").join("run.json");
    write_report(&report, &path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["mode"], "run");
    assert_eq!(json["assembly"]["dropout_flagged"], 1);
    assert_eq!(json["cleaned"][0]["entity"], "AttendanceRecord");
    assert_eq!(json["tables"].as_array().map(Vec::len), Some(6));
    // self reference, sentinel invigilator, malformed score range, bad semester code
    assert_eq!(report.rows_dropped(), 4);
}
