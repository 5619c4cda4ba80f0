//! Student cleaner.

use dwh_model::Entity;
use dwh_model::columns::{ADMISSION_DATE, DEPARTMENT_ID, DOB, GENDER, NAME, NATIONALITY, STUDENT_ID};
use polars::prelude::DataFrame;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::datetime::SlashOrder;
use crate::error::Result;
use crate::mappings::GENDER_MAP;

pub(crate) struct StudentCleaner;

impl EntityCleaner for StudentCleaner {
    fn entity(&self) -> Entity {
        Entity::Student
    }

    fn description(&self) -> &'static str {
        "Gender canonicalized; DOB read day-first; one row per StudentID"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        // Birth dates arrive as DD/MM/YYYY; every other date column is month-first.
        work.parse_dates(DOB, SlashOrder::DayFirst)?;
        work.parse_dates(ADMISSION_DATE, SlashOrder::MonthFirst)?;
        work.canonicalize(GENDER, &GENDER_MAP)?;
        work.trim(&[STUDENT_ID, NAME, NATIONALITY, DEPARTMENT_ID])?;
        work.dedupe_natural_key()?;
        Ok(work.finish())
    }
}
