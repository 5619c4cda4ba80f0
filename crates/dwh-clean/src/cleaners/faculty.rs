//! Faculty and FacultyCourseAssignment cleaners.

use dwh_model::Entity;
use dwh_model::columns::{
    COURSE_ID, DEPARTMENT_ID, FACULTY_ID, HIRE_DATE, NAME, ROLE, SEMESTER_ID, SPECIALIZATION,
};
use polars::prelude::DataFrame;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::datetime::SlashOrder;
use crate::error::Result;
use crate::mappings::ROLE_MAP;

pub(crate) struct FacultyCleaner;

impl EntityCleaner for FacultyCleaner {
    fn entity(&self) -> Entity {
        Entity::Faculty
    }

    fn description(&self) -> &'static str {
        "Specialization default; one row per FacultyID"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.parse_dates(HIRE_DATE, SlashOrder::MonthFirst)?;
        work.fill_default(SPECIALIZATION, "Unknown")?;
        work.trim(&[FACULTY_ID, NAME, DEPARTMENT_ID])?;
        work.dedupe_natural_key()?;
        Ok(work.finish())
    }
}

pub(crate) struct FacultyAssignmentCleaner;

impl EntityCleaner for FacultyAssignmentCleaner {
    fn entity(&self) -> Entity {
        Entity::FacultyCourseAssignment
    }

    fn description(&self) -> &'static str {
        "Role canonicalized"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.trim(&[FACULTY_ID, COURSE_ID, SEMESTER_ID])?;
        work.canonicalize(ROLE, &ROLE_MAP)?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}
