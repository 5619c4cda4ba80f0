//! Course and CoursePrerequisite cleaners.

use dwh_ingest::{format_numeric, parse_f64};
use dwh_model::columns::{COURSE_ID, CREDITS, DEPARTMENT_ID, PREREQUISITE_COURSE_ID, TITLE, TYPE};
use dwh_model::{DropReason, Entity, RepairReason};
use polars::prelude::DataFrame;
use tracing::warn;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::error::Result;
use crate::imputation::median;

pub(crate) struct CourseCleaner;

impl EntityCleaner for CourseCleaner {
    fn entity(&self) -> Entity {
        Entity::Course
    }

    fn description(&self) -> &'static str {
        "Title/Type defaults; invalid credits replaced by the median of valid credits"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.fill_default(TITLE, "Unknown Title")?;
        work.fill_default(TYPE, "Unknown Type")?;
        work.trim(&[COURSE_ID, DEPARTMENT_ID])?;
        repair_credits(&mut work)?;
        work.dedupe_natural_key()?;
        Ok(work.finish())
    }
}

/// Credits are valid when numeric and positive. Everything else, the `-1`
/// sentinel included, takes the median of the valid values; with no valid
/// value to take a median of, those rows are dropped.
fn repair_credits(work: &mut CleaningFrame) -> Result<()> {
    let parsed: Vec<Option<f64>> = work
        .values(CREDITS)?
        .iter()
        .map(|value| value.as_deref().and_then(parse_f64))
        .collect();
    let valid: Vec<f64> = parsed.iter().flatten().copied().filter(|v| *v > 0.0).collect();

    let Some(median) = median(&valid) else {
        let keep: Vec<bool> = parsed.iter().map(|v| v.is_some_and(|v| v > 0.0)).collect();
        warn!(rows = keep.iter().filter(|k| !**k).count(), "no valid credits to impute from");
        work.set(
            CREDITS,
            parsed.iter().map(|v| v.map(format_numeric)).collect(),
        )?;
        return work.retain(DropReason::NoMedianAvailable(CREDITS), &keep);
    };

    let mut imputed = 0;
    let values = parsed
        .iter()
        .map(|value| match value {
            Some(v) if *v > 0.0 => Some(format_numeric(*v)),
            _ => {
                imputed += 1;
                Some(format_numeric(median))
            }
        })
        .collect();
    work.set(CREDITS, values)?;
    work.report_mut()
        .record_repair(RepairReason::MedianImputed(CREDITS), imputed);
    Ok(())
}

pub(crate) struct CoursePrerequisiteCleaner;

impl EntityCleaner for CoursePrerequisiteCleaner {
    fn entity(&self) -> Entity {
        Entity::CoursePrerequisite
    }

    fn description(&self) -> &'static str {
        "Duplicate pairs and self-prerequisites removed"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.trim(&[COURSE_ID, PREREQUISITE_COURSE_ID])?;
        work.dedupe_rows()?;

        let courses = work.values(COURSE_ID)?;
        let prerequisites = work.values(PREREQUISITE_COURSE_ID)?;
        let keep: Vec<bool> = courses
            .iter()
            .zip(&prerequisites)
            .map(|(course, prerequisite)| match (course, prerequisite) {
                (Some(course), Some(prerequisite)) => course != prerequisite,
                _ => true,
            })
            .collect();
        work.retain(DropReason::SelfReference, &keep)?;
        Ok(work.finish())
    }
}
