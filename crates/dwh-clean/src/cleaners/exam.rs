//! ExamResult and ExamSchedule cleaners.

use dwh_ingest::{format_numeric, parse_f64};
use dwh_model::columns::{
    COURSE_ID, DATE, EXAM_TYPE, FACULTY_ID, ROOM_ID, SCHEDULED_DATE, SCORE, STUDENT_ID, TYPE,
};
use dwh_model::{DropReason, Entity, RepairReason};
use polars::prelude::DataFrame;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::datetime::SlashOrder;
use crate::error::Result;
use crate::mappings::EXAM_TYPE_MAP;

/// Prefix marking an identifier the source system could not resolve.
const INVALID_ID_PREFIX: &str = "INVALID_";

pub(crate) struct ExamResultCleaner;

impl EntityCleaner for ExamResultCleaner {
    fn entity(&self) -> Entity {
        Entity::ExamResult
    }

    fn description(&self) -> &'static str {
        "Negative scores clamped to zero; exam type canonicalized"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.parse_dates(DATE, SlashOrder::MonthFirst)?;
        clamp_scores(&mut work)?;
        work.canonicalize(EXAM_TYPE, &EXAM_TYPE_MAP)?;
        work.trim(&[STUDENT_ID, COURSE_ID])?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}

fn clamp_scores(work: &mut CleaningFrame) -> Result<()> {
    let mut clamped = 0;
    let values = work
        .values(SCORE)?
        .iter()
        .map(|value| {
            let score = value.as_deref().and_then(parse_f64)?;
            if score < 0.0 {
                clamped += 1;
                Some(format_numeric(0.0))
            } else {
                Some(format_numeric(score))
            }
        })
        .collect();
    work.set(SCORE, values)?;
    work.report_mut()
        .record_repair(RepairReason::ClampedNegative(SCORE), clamped);
    Ok(())
}

pub(crate) struct ExamScheduleCleaner;

impl EntityCleaner for ExamScheduleCleaner {
    fn entity(&self) -> Entity {
        Entity::ExamSchedule
    }

    fn description(&self) -> &'static str {
        "Type default in title case; rows with INVALID_ identifiers dropped"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.parse_dates(SCHEDULED_DATE, SlashOrder::MonthFirst)?;
        work.fill_default(TYPE, "Unknown Type")?;
        let titled = work
            .values(TYPE)?
            .into_iter()
            .map(|value| value.map(|v| title_case(&v)))
            .collect();
        work.set(TYPE, titled)?;
        work.trim(&[COURSE_ID, FACULTY_ID, ROOM_ID])?;
        for column in [COURSE_ID, FACULTY_ID, ROOM_ID] {
            let keep: Vec<bool> = work
                .values(column)?
                .iter()
                .map(|value| {
                    !value
                        .as_deref()
                        .is_some_and(|v| v.starts_with(INVALID_ID_PREFIX))
                })
                .collect();
            work.retain(DropReason::SentinelValue(column), &keep)?;
        }
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}

/// Upper-cases the first letter of each word and lower-cases the rest.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
