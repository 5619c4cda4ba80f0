//! Enrollment and DropoutLog cleaners.

use std::sync::LazyLock;

use dwh_model::Entity;
use dwh_model::columns::{
    COURSE_ID, DROPOUT_DATE, ENROLLMENT_STATUS, LAST_SEMESTER, REASON, SEMESTER_ID, STUDENT_ID,
};
use polars::prelude::DataFrame;
use regex::Regex;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::datetime::SlashOrder;
use crate::error::Result;
use crate::mappings::ENROLLMENT_STATUS_MAP;

static SEMESTER_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SEM\d+$").expect("Invalid semester regex"));

pub(crate) struct EnrollmentCleaner;

impl EntityCleaner for EnrollmentCleaner {
    fn entity(&self) -> Entity {
        Entity::Enrollment
    }

    fn description(&self) -> &'static str {
        "SemesterID must be a semester code; status canonicalized"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.trim(&[STUDENT_ID, COURSE_ID, SEMESTER_ID])?;
        work.drop_unmatched(SEMESTER_ID, &SEMESTER_CODE_REGEX)?;
        work.canonicalize(ENROLLMENT_STATUS, &ENROLLMENT_STATUS_MAP)?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}

pub(crate) struct DropoutLogCleaner;

impl EntityCleaner for DropoutLogCleaner {
    fn entity(&self) -> Entity {
        Entity::DropoutLog
    }

    fn description(&self) -> &'static str {
        "Reason default; LastSemester must be a semester code"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.parse_dates(DROPOUT_DATE, SlashOrder::MonthFirst)?;
        work.fill_default(REASON, "Unknown")?;
        work.trim(&[STUDENT_ID, LAST_SEMESTER])?;
        work.drop_unmatched(LAST_SEMESTER, &SEMESTER_CODE_REGEX)?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}
