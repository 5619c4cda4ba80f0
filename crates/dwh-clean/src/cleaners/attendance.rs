//! AttendanceRecord cleaner.

use dwh_model::Entity;
use dwh_model::columns::{COURSE_ID, DATE, STATUS, STUDENT_ID};
use polars::prelude::DataFrame;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::datetime::SlashOrder;
use crate::error::Result;
use crate::mappings::ATTENDANCE_STATUS_MAP;

pub(crate) struct AttendanceCleaner;

impl EntityCleaner for AttendanceCleaner {
    fn entity(&self) -> Entity {
        Entity::AttendanceRecord
    }

    fn description(&self) -> &'static str {
        "Status required and canonicalized; one mark per student, course and date"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.parse_dates(DATE, SlashOrder::MonthFirst)?;
        work.drop_missing(STATUS)?;
        work.canonicalize(STATUS, &ATTENDANCE_STATUS_MAP)?;
        work.trim(&[STUDENT_ID, COURSE_ID])?;
        work.dedupe_natural_key()?;
        Ok(work.finish())
    }
}
