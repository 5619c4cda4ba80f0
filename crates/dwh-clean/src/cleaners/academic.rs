//! Department, Grade and Semester cleaners.

use std::sync::LazyLock;

use dwh_model::Entity;
use dwh_model::columns::{
    DEPARTMENT_ID, DEPARTMENT_NAME, END_DATE, GRADE, GRADE_ID, LOCATION, SCORE_RANGE, SEMESTER_ID,
    START_DATE, TERM,
};
use polars::prelude::DataFrame;
use regex::Regex;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::datetime::SlashOrder;
use crate::error::Result;
use crate::mappings::TERM_MAP;

/// `low-high` with one to three digits on each side.
static SCORE_RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}-\d{1,3}$").expect("Invalid score range regex"));

pub(crate) struct DepartmentCleaner;

impl EntityCleaner for DepartmentCleaner {
    fn entity(&self) -> Entity {
        Entity::Department
    }

    fn description(&self) -> &'static str {
        "Name default; one row per DepartmentID"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.fill_default(DEPARTMENT_NAME, "Unknown")?;
        work.trim(&[DEPARTMENT_ID, LOCATION])?;
        work.dedupe_natural_key()?;
        Ok(work.finish())
    }
}

pub(crate) struct GradeCleaner;

impl EntityCleaner for GradeCleaner {
    fn entity(&self) -> Entity {
        Entity::Grade
    }

    fn description(&self) -> &'static str {
        "ScoreRange must read low-high"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.trim(&[SCORE_RANGE])?;
        work.drop_unmatched(SCORE_RANGE, &SCORE_RANGE_REGEX)?;
        work.trim(&[GRADE_ID, GRADE])?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}

pub(crate) struct SemesterCleaner;

impl EntityCleaner for SemesterCleaner {
    fn entity(&self) -> Entity {
        Entity::Semester
    }

    fn description(&self) -> &'static str {
        "Term canonicalized; start and end dates parsed"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.canonicalize(TERM, &TERM_MAP)?;
        work.parse_dates(START_DATE, SlashOrder::MonthFirst)?;
        work.parse_dates(END_DATE, SlashOrder::MonthFirst)?;
        work.trim(&[SEMESTER_ID])?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}
