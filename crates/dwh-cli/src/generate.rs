//! Synthetic raw extracts carrying the defects the cleaners repair.
//!
//! Every table draws from one seeded [`StdRng`] in a fixed order, so a seed
//! always produces the same fifteen files. Catalogue tables (departments,
//! faculty, courses, semesters, classrooms, grades) have fixed sizes; the
//! student register and every event table get `rows` rows.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use dwh_ingest::{string_column, write_csv_table};
use dwh_model::columns::{
    ACADEMIC_YEAR, ADMISSION_DATE, BUILDING_NAME, CAPACITY, COMMENTS, COURSE_ID, CREDITS, DATE,
    DEPARTMENT_ID, DEPARTMENT_NAME, DOB, DROPOUT_DATE, END_DATE, ENROLLMENT_STATUS, EXAM_ID,
    EXAM_TYPE, FACULTY_ID, GENDER, GPA, GRADE, GRADE_ID, HIRE_DATE, LAST_SEMESTER, LOCATION, NAME,
    NATIONALITY, PREREQUISITE_COURSE_ID, RATING, REASON, RESOURCE_TYPE, ROLE, ROOM_ID, SCHEDULED_DATE,
    SCORE, SCORE_RANGE, SEMESTER_ID, SPECIALIZATION, START_DATE, STATUS, STUDENT_ID, TERM, TITLE,
    TYPE,
};
use dwh_model::{Entity, PipelinePaths};
use polars::prelude::{Column, DataFrame};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span};

pub const DEFAULT_ROWS: usize = 10_000;
pub const DEFAULT_SEED: u64 = 42;

const DEPARTMENT_COUNT: usize = 10;
const FACULTY_COUNT: usize = 300;
const COURSE_COUNT: usize = 100;
const SEMESTER_COUNT: usize = 6;
const CLASSROOM_COUNT: usize = 30;

const YEAR_DAYS: u64 = 365;

/// Extra exam column with no cleaning rule of its own.
const MAX_SCORE: &str = "MaxScore";

const FIRST_NAMES: &[&str] = &[
    "Ada", "Brian", "Chen", "Dalia", "Emeka", "Fatima", "Goran", "Hana", "Ivan", "Jamal", "Keiko",
    "Lucia", "Mateo", "Nadia", "Omar", "Priya", "Quinn", "Rosa", "Sven", "Tariq", "Uma", "Viktor",
    "Wen", "Yara", "Zoltan",
];
const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauer", "Castillo", "Dubois", "Eriksen", "Fischer", "Gomez", "Haddad", "Ito",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Quispe", "Rossi",
    "Sato", "Tanaka", "Umar", "Varga", "Walsh", "Yilmaz", "Zhang",
];
const CITIES: &[&str] = &[
    "Aberdeen", "Bologna", "Coimbra", "Delft", "Edinburgh", "Freiburg", "Ghent", "Heidelberg",
    "Leuven", "Uppsala",
];
const COUNTRIES: &[&str] = &[
    "Brazil", "Canada", "Egypt", "France", "Ghana", "India", "Japan", "Kenya", "Mexico", "Norway",
    "Peru", "Poland", "Spain", "Vietnam",
];
const COMPANY_SUFFIXES: &[&str] = &["Group", "Institute", "Labs", "Partners", "Holdings"];
const JOBS: &[&str] = &[
    "Data Scientist", "Economist", "Geologist", "Historian", "Linguist", "Mathematician",
    "Physicist", "Statistician", "Structural Engineer", "Translator",
];
const TITLE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Applied", "Distributed", "Foundational", "Integrated", "Modern", "Quantitative",
    "Sustainable",
];
const TITLE_NOUNS: &[&str] = &[
    "Algorithms", "Analytics", "Architecture", "Ecology", "Finance", "Linguistics", "Mechanics",
    "Systems",
];
const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Court"];
const COMMENT_TEXTS: &[&str] = &[
    "Clear lectures and fair exams.",
    "Too much material for one term.",
    "Labs were the best part.",
    "Slides could be better organised.",
    "Helpful office hours.",
    "Assignments took longer than expected.",
];

/// Knobs for one generated data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Rows in the student register and in each event table.
    pub rows: usize,
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
        }
    }
}

/// One generated raw extract.
#[derive(Debug, Clone)]
pub struct GeneratedTable {
    pub entity: Entity,
    pub rows: usize,
    pub path: PathBuf,
}

/// Writes all fifteen `<entity>_raw.csv` extracts into `raw_dir`.
///
/// Every frame is built before the first file is written.
pub fn generate_stage(raw_dir: &Path, options: GenerateOptions) -> Result<Vec<GeneratedTable>> {
    let span = info_span!("generate", raw_dir = %raw_dir.display(), seed = options.seed);
    let _guard = span.enter();
    let start = Instant::now();

    let tables = generate_tables(options)?;
    let paths = PipelinePaths::from_raw_dir(raw_dir);
    let mut generated = Vec::with_capacity(tables.len());
    for (entity, mut data) in tables {
        let path = paths.raw_path(entity);
        write_csv_table(&mut data, &path).with_context(|| format!("write {}", path.display()))?;
        debug!(%entity, rows = data.height(), "raw extract written");
        generated.push(GeneratedTable {
            entity,
            rows: data.height(),
            path,
        });
    }

    info!(
        tables = generated.len(),
        rows = options.rows,
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );
    Ok(generated)
}

/// Builds every raw extract in catalogue order without touching the disk.
pub fn generate_tables(options: GenerateOptions) -> Result<Vec<(Entity, DataFrame)>> {
    let reference =
        NaiveDate::from_ymd_opt(2025, 1, 1).context("build generator reference date")?;
    let mut generator = Generator {
        rng: StdRng::seed_from_u64(options.seed),
        reference,
    };
    let ids = Ids::new(options.rows);
    let rows = options.rows;

    // Draw order is fixed so a seed reproduces every file.
    let mut tables = vec![
        (Entity::Department, departments(&mut generator, &ids)?),
        (Entity::Faculty, faculty(&mut generator, &ids)?),
        (Entity::Student, students(&mut generator, &ids)?),
        (Entity::Course, courses(&mut generator, &ids)?),
        (Entity::Semester, semesters(&mut generator, &ids)?),
        (Entity::Classroom, classrooms(&mut generator, &ids)?),
        (Entity::Enrollment, enrollments(&mut generator, &ids, rows)?),
        (Entity::FacultyCourseAssignment, assignments(&mut generator, &ids, rows)?),
        (Entity::AttendanceRecord, attendance(&mut generator, &ids, rows)?),
        (Entity::ExamResult, exam_results(&mut generator, &ids, rows)?),
        (Entity::FeedbackResponse, feedback(&mut generator, &ids, rows)?),
        (Entity::ExamSchedule, exam_schedule(&mut generator, &ids, rows)?),
        (Entity::Grade, grades()?),
        (Entity::DropoutLog, dropouts(&mut generator, &ids, rows)?),
        (Entity::CoursePrerequisite, prerequisites(&mut generator, &ids, rows)?),
    ];
    tables.sort_by_key(|(entity, _)| *entity);
    Ok(tables)
}

struct Generator {
    rng: StdRng,
    reference: NaiveDate,
}

impl Generator {
    fn choice(&mut self, values: &[&str]) -> String {
        values
            .choose(&mut self.rng)
            .map(|value| (*value).to_string())
            .unwrap_or_default()
    }

    /// Like [`Generator::choice`] but some options are a missing cell.
    fn maybe(&mut self, values: &[Option<&str>]) -> Option<String> {
        values
            .choose(&mut self.rng)
            .copied()
            .flatten()
            .map(str::to_string)
    }

    fn id(&mut self, ids: &[String]) -> Option<String> {
        ids.choose(&mut self.rng).cloned()
    }

    /// Picks uniformly among `ids` plus one identifier that matches nothing.
    fn id_or_stray(&mut self, ids: &[String], stray: &str) -> Option<String> {
        let index = self.rng.gen_range(0..=ids.len());
        Some(ids.get(index).map_or_else(|| stray.to_string(), Clone::clone))
    }

    fn integer(&mut self, values: &[i64]) -> String {
        values
            .choose(&mut self.rng)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// ISO date between `min_days` and `max_days` before the reference date.
    fn date_back(&mut self, min_days: u64, max_days: u64) -> String {
        let days = self.rng.gen_range(min_days..=max_days);
        self.reference
            .checked_sub_days(Days::new(days))
            .unwrap_or(self.reference)
            .format("%Y-%m-%d")
            .to_string()
    }

    fn person(&mut self) -> String {
        let first = self.choice(FIRST_NAMES);
        let last = self.choice(LAST_NAMES);
        format!("{first} {last}")
    }

    fn company(&mut self) -> String {
        let name = self.choice(LAST_NAMES);
        let suffix = self.choice(COMPANY_SUFFIXES);
        format!("{name} {suffix}")
    }

    fn course_title(&mut self) -> String {
        let adjective = self.choice(TITLE_ADJECTIVES);
        let noun = self.choice(TITLE_NOUNS);
        format!("{adjective} {noun}")
    }

    fn street(&mut self) -> String {
        let name = self.choice(LAST_NAMES);
        let suffix = self.choice(STREET_SUFFIXES);
        format!("{name} {suffix}")
    }
}

struct Ids {
    departments: Vec<String>,
    faculty: Vec<String>,
    students: Vec<String>,
    courses: Vec<String>,
    semesters: Vec<String>,
    rooms: Vec<String>,
}

impl Ids {
    fn new(students: usize) -> Self {
        Self {
            departments: numbered("D", DEPARTMENT_COUNT),
            faculty: numbered("F", FACULTY_COUNT),
            students: numbered("S", students),
            courses: numbered("C", COURSE_COUNT),
            semesters: (1..=SEMESTER_COUNT).map(|i| format!("SEM{i}")).collect(),
            rooms: numbered("R", CLASSROOM_COUNT),
        }
    }
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i:04}")).collect()
}

fn frame(columns: Vec<(&str, Vec<Option<String>>)>) -> Result<DataFrame> {
    let columns: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| string_column(name, values))
        .collect();
    DataFrame::new(columns).context("build generated frame")
}

fn departments(generator: &mut Generator, ids: &Ids) -> Result<DataFrame> {
    let names = (0..ids.departments.len())
        .map(|i| match i {
            0 => None,
            i if i % 7 == 0 => {
                Some(generator.choice(&["CompSci", "Computer Science", "CS", "Comp Science"]))
            }
            _ => Some(generator.company()),
        })
        .collect();
    let locations = ids
        .departments
        .iter()
        .map(|_| Some(generator.choice(CITIES)))
        .collect();
    frame(vec![
        (DEPARTMENT_ID, ids.departments.iter().cloned().map(Some).collect()),
        (DEPARTMENT_NAME, names),
        (LOCATION, locations),
    ])
}

fn faculty(generator: &mut Generator, ids: &Ids) -> Result<DataFrame> {
    let count = ids.faculty.len();
    let names = (0..count).map(|_| Some(generator.person())).collect();
    let hired = (0..count)
        .map(|_| Some(generator.date_back(YEAR_DAYS, 10 * YEAR_DAYS)))
        .collect();
    let specializations = (0..count)
        .map(|i| {
            if i % 10 == 0 {
                generator.maybe(&[Some("AI"), Some("A.I"), Some("Artificial Intelligence"), None])
            } else {
                Some(generator.choice(JOBS))
            }
        })
        .collect();
    let departments = (0..count).map(|_| generator.id(&ids.departments)).collect();
    frame(vec![
        (FACULTY_ID, ids.faculty.iter().cloned().map(Some).collect()),
        (NAME, names),
        (HIRE_DATE, hired),
        (SPECIALIZATION, specializations),
        (DEPARTMENT_ID, departments),
    ])
}

fn students(generator: &mut Generator, ids: &Ids) -> Result<DataFrame> {
    let count = ids.students.len();
    let names = (0..count).map(|_| Some(generator.person())).collect();
    let genders = (0..count)
        .map(|_| Some(generator.choice(&["Male", "Female", "Other", "M", "F"])))
        .collect();
    let births = (0..count)
        .map(|i| {
            if i % 50 == 0 {
                Some("31/02/2000".to_string())
            } else {
                Some(generator.date_back(18 * YEAR_DAYS, 30 * YEAR_DAYS))
            }
        })
        .collect();
    let nationalities = (0..count).map(|_| Some(generator.choice(COUNTRIES))).collect();
    let admissions = (0..count)
        .map(|_| Some(generator.date_back(YEAR_DAYS, 6 * YEAR_DAYS)))
        .collect();
    let departments = (0..count)
        .map(|_| generator.id_or_stray(&ids.departments, "D9999"))
        .collect();
    frame(vec![
        (STUDENT_ID, ids.students.iter().cloned().map(Some).collect()),
        (NAME, names),
        (GENDER, genders),
        (DOB, births),
        (NATIONALITY, nationalities),
        (ADMISSION_DATE, admissions),
        (DEPARTMENT_ID, departments),
    ])
}

fn courses(generator: &mut Generator, ids: &Ids) -> Result<DataFrame> {
    let count = ids.courses.len();
    let titles = (0..count)
        .map(|i| {
            if i % 8 == 0 {
                Some(String::new())
            } else {
                Some(generator.course_title())
            }
        })
        .collect();
    let credits = (0..count)
        .map(|_| Some(generator.integer(&[2, 3, 4, 5, -1])))
        .collect();
    let types = (0..count)
        .map(|_| generator.maybe(&[Some("Theory"), Some("Lab"), Some("lecture"), None]))
        .collect();
    let departments = (0..count).map(|_| generator.id(&ids.departments)).collect();
    frame(vec![
        (COURSE_ID, ids.courses.iter().cloned().map(Some).collect()),
        (TITLE, titles),
        (CREDITS, credits),
        (TYPE, types),
        (DEPARTMENT_ID, departments),
    ])
}

fn semesters(generator: &mut Generator, ids: &Ids) -> Result<DataFrame> {
    let years: Vec<usize> = (0..ids.semesters.len()).map(|i| 2020 + i).collect();
    let terms = years
        .iter()
        .map(|_| Some(generator.choice(&["Spring", "Fall", "Sprng", "summer"])))
        .collect();
    frame(vec![
        (SEMESTER_ID, ids.semesters.iter().cloned().map(Some).collect()),
        (ACADEMIC_YEAR, years.iter().map(|y| Some(y.to_string())).collect()),
        (TERM, terms),
        (START_DATE, years.iter().map(|y| Some(format!("{y}-01-10"))).collect()),
        (END_DATE, years.iter().map(|y| Some(format!("{y}-05-10"))).collect()),
    ])
}

fn classrooms(generator: &mut Generator, ids: &Ids) -> Result<DataFrame> {
    let count = ids.rooms.len();
    let buildings = (0..count).map(|_| Some(generator.street())).collect();
    let capacities = (0..count)
        .map(|_| Some(generator.integer(&[20, 30, 50, 100, 0])))
        .collect();
    let resources = (0..count)
        .map(|_| generator.maybe(&[Some("Lab"), Some("Lecture Hall"), Some("Class"), None]))
        .collect();
    frame(vec![
        (ROOM_ID, ids.rooms.iter().cloned().map(Some).collect()),
        (BUILDING_NAME, buildings),
        (CAPACITY, capacities),
        (RESOURCE_TYPE, resources),
    ])
}

fn enrollments(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let students = (0..rows)
        .map(|_| generator.id_or_stray(&ids.students, "S9999"))
        .collect();
    let courses = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "C9999"))
        .collect();
    let semesters = (0..rows)
        .map(|_| generator.id_or_stray(&ids.semesters, "INVALID_SEM"))
        .collect();
    let statuses = (0..rows)
        .map(|_| {
            generator.maybe(&[
                Some("Active"),
                Some("Dropped"),
                Some("active"),
                Some("dropped"),
                None,
            ])
        })
        .collect();
    frame(vec![
        (STUDENT_ID, students),
        (COURSE_ID, courses),
        (SEMESTER_ID, semesters),
        (ENROLLMENT_STATUS, statuses),
    ])
}

fn assignments(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let faculty = (0..rows)
        .map(|_| generator.id_or_stray(&ids.faculty, "F9999"))
        .collect();
    let courses = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "C9999"))
        .collect();
    let semesters = (0..rows)
        .map(|_| generator.id_or_stray(&ids.semesters, "INVALID_SEM"))
        .collect();
    let roles = (0..rows)
        .map(|_| {
            generator.maybe(&[
                Some("Instructor"),
                Some("TA"),
                Some("instructor"),
                Some("Teaching Assistant"),
                None,
            ])
        })
        .collect();
    frame(vec![
        (FACULTY_ID, faculty),
        (COURSE_ID, courses),
        (SEMESTER_ID, semesters),
        (ROLE, roles),
    ])
}

fn attendance(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let students = (0..rows)
        .map(|_| generator.id_or_stray(&ids.students, "S0000"))
        .collect();
    let courses = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "C0000"))
        .collect();
    let dates = (0..rows)
        .map(|_| Some(generator.date_back(0, 6 * YEAR_DAYS)))
        .collect();
    let statuses = (0..rows)
        .map(|_| {
            generator.maybe(&[
                Some("Present"),
                Some("Absent"),
                Some("Late"),
                Some("P"),
                Some("A"),
                None,
            ])
        })
        .collect();
    frame(vec![
        (STUDENT_ID, students),
        (COURSE_ID, courses),
        (DATE, dates),
        (STATUS, statuses),
    ])
}

fn exam_results(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let students = (0..rows)
        .map(|_| generator.id_or_stray(&ids.students, "S1111"))
        .collect();
    let courses = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "C1111"))
        .collect();
    let exam_types = (0..rows)
        .map(|_| Some(generator.choice(&["Midterm", "Final", "Quiz", "final", "mid"])))
        .collect();
    let scores = (0..rows)
        .map(|_| Some(generator.rng.gen_range(-10..110).to_string()))
        .collect();
    let max_scores = (0..rows)
        .map(|_| Some(generator.integer(&[100, 50, 75, 80, 0])))
        .collect();
    let dates = (0..rows)
        .map(|_| Some(generator.date_back(0, 6 * YEAR_DAYS)))
        .collect();
    frame(vec![
        (STUDENT_ID, students),
        (COURSE_ID, courses),
        (EXAM_TYPE, exam_types),
        (SCORE, scores),
        (MAX_SCORE, max_scores),
        (DATE, dates),
    ])
}

fn feedback(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let students = (0..rows)
        .map(|_| generator.id_or_stray(&ids.students, "S2222"))
        .collect();
    let courses = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "C2222"))
        .collect();
    let faculty = (0..rows)
        .map(|_| generator.id_or_stray(&ids.faculty, "F2222"))
        .collect();
    let semesters = (0..rows)
        .map(|_| generator.id_or_stray(&ids.semesters, "SEM999"))
        .collect();
    let ratings = (0..rows)
        .map(|_| {
            generator.maybe(&[
                Some("1"),
                Some("2"),
                Some("3"),
                Some("4"),
                Some("5"),
                Some("6"),
                Some("0"),
                None,
            ])
        })
        .collect();
    let comments = (0..rows)
        .map(|i| (i % 10 != 0).then(|| generator.choice(COMMENT_TEXTS)))
        .collect();
    frame(vec![
        (STUDENT_ID, students),
        (COURSE_ID, courses),
        (FACULTY_ID, faculty),
        (SEMESTER_ID, semesters),
        (RATING, ratings),
        (COMMENTS, comments),
    ])
}

fn exam_schedule(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let courses = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "INVALID_COURSE"))
        .collect();
    let faculty = (0..rows)
        .map(|_| generator.id_or_stray(&ids.faculty, "INVALID_FAC"))
        .collect();
    let rooms = (0..rows)
        .map(|_| generator.id_or_stray(&ids.rooms, "INVALID_ROOM"))
        .collect();
    let dates = (0..rows)
        .map(|_| Some(generator.date_back(0, 6 * YEAR_DAYS)))
        .collect();
    let types = (0..rows)
        .map(|_| {
            generator.maybe(&[
                Some("Midterm"),
                Some("Final"),
                Some("Quiz"),
                Some("Assessment"),
                None,
            ])
        })
        .collect();
    frame(vec![
        (EXAM_ID, numbered("E", rows).into_iter().map(Some).collect()),
        (COURSE_ID, courses),
        (FACULTY_ID, faculty),
        (ROOM_ID, rooms),
        (SCHEDULED_DATE, dates),
        (TYPE, types),
    ])
}

fn grades() -> Result<DataFrame> {
    let bands = [
        ("90-100", "A", "4.0"),
        ("80-89", "B+", "3.7"),
        ("70-79", "B", "3.3"),
        ("60-69", "C+", "3.0"),
        ("50-59", "C", "2.7"),
        ("40-49", "D+", "2.3"),
        ("30-39", "D", "2.0"),
        ("20-29", "E", "1.7"),
        ("10-19", "F", "1.0"),
        ("0-9", "F-", "0.0"),
    ];
    frame(vec![
        (GRADE_ID, numbered("G", bands.len()).into_iter().map(Some).collect()),
        (SCORE_RANGE, bands.iter().map(|b| Some(b.0.to_string())).collect()),
        (GRADE, bands.iter().map(|b| Some(b.1.to_string())).collect()),
        (GPA, bands.iter().map(|b| Some(b.2.to_string())).collect()),
    ])
}

fn dropouts(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let students = (0..rows)
        .map(|_| generator.id_or_stray(&ids.students, "S3333"))
        .collect();
    let dates = (0..rows)
        .map(|_| Some(generator.date_back(YEAR_DAYS, 6 * YEAR_DAYS)))
        .collect();
    let reasons = (0..rows)
        .map(|_| {
            generator.maybe(&[
                Some("Financial"),
                Some("Academic"),
                Some("Transfer"),
                Some(""),
                None,
            ])
        })
        .collect();
    let last_semesters = (0..rows)
        .map(|_| generator.id_or_stray(&ids.semesters, "SEM000"))
        .collect();
    frame(vec![
        (STUDENT_ID, students),
        (DROPOUT_DATE, dates),
        (REASON, reasons),
        (LAST_SEMESTER, last_semesters),
    ])
}

fn prerequisites(generator: &mut Generator, ids: &Ids, rows: usize) -> Result<DataFrame> {
    let courses = (0..rows).map(|_| generator.id(&ids.courses)).collect();
    let prerequisites = (0..rows)
        .map(|_| generator.id_or_stray(&ids.courses, "INVALID_COURSE"))
        .collect();
    frame(vec![
        (COURSE_ID, courses),
        (PREREQUISITE_COURSE_ID, prerequisites),
    ])
}

#[cfg(test)]
mod tests {
    use dwh_ingest::column_values;

    use super::*;

    fn small() -> GenerateOptions {
        GenerateOptions { rows: 60, seed: 7 }
    }

    fn table(tables: &[(Entity, DataFrame)], entity: Entity) -> &DataFrame {
        &tables.iter().find(|(e, _)| *e == entity).unwrap().1
    }

    #[test]
    fn builds_every_entity_with_required_columns() {
        let tables = generate_tables(small()).unwrap();
        let entities: Vec<Entity> = tables.iter().map(|(entity, _)| *entity).collect();
        assert_eq!(entities, Entity::ALL.to_vec());
        for (entity, data) in &tables {
            for column in entity.required_columns() {
                assert!(data.column(column).is_ok(), "{entity} lacks {column}");
            }
        }
        assert_eq!(table(&tables, Entity::Student).height(), 60);
        assert_eq!(table(&tables, Entity::Course).height(), COURSE_COUNT);
        assert_eq!(table(&tables, Entity::Grade).height(), 10);
    }

    #[test]
    fn same_seed_same_tables() {
        let first = generate_tables(small()).unwrap();
        let second = generate_tables(small()).unwrap();
        for ((_, a), (_, b)) in first.iter().zip(&second) {
            assert!(a.equals_missing(b));
        }
        let other = generate_tables(GenerateOptions { seed: 8, ..small() }).unwrap();
        assert!(!table(&first, Entity::Enrollment).equals_missing(table(&other, Entity::Enrollment)));
    }

    #[test]
    fn student_register_carries_known_defects() {
        let tables = generate_tables(small()).unwrap();
        let students = table(&tables, Entity::Student);
        let births = column_values(students, DOB).unwrap();
        assert_eq!(births[0].as_deref(), Some("31/02/2000"));
        assert_eq!(births[50].as_deref(), Some("31/02/2000"));
        let departments = column_values(table(&tables, Entity::Department), DEPARTMENT_NAME).unwrap();
        assert_eq!(departments[0], None);
    }
}
