//! FeedbackResponse cleaner.

use std::sync::LazyLock;

use dwh_model::columns::{COMMENTS, COURSE_ID, FACULTY_ID, RATING, SEMESTER_ID, STUDENT_ID};
use dwh_model::{DropReason, Entity};
use polars::prelude::DataFrame;
use regex::Regex;

use super::common::CleaningFrame;
use crate::cleaner_trait::{CleanOutcome, EntityCleaner};
use crate::error::Result;

/// `SEM` followed by one or two digits.
static FEEDBACK_SEMESTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SEM\d{1,2}$").expect("Invalid semester regex"));

pub(crate) struct FeedbackCleaner;

impl EntityCleaner for FeedbackCleaner {
    fn entity(&self) -> Entity {
        Entity::FeedbackResponse
    }

    fn description(&self) -> &'static str {
        "Numeric rating required; comment default; SemesterID must read SEM plus two digits at most"
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanOutcome> {
        let mut work = CleaningFrame::new(self.entity(), raw)?;
        work.keep_numeric(RATING, DropReason::MissingRequired(RATING), |_| true)?;
        work.fill_default(COMMENTS, "No Comment")?;
        work.trim(&[STUDENT_ID, COURSE_ID, FACULTY_ID, SEMESTER_ID])?;
        work.drop_unmatched(SEMESTER_ID, &FEEDBACK_SEMESTER_REGEX)?;
        work.dedupe_rows()?;
        Ok(work.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_pattern_accepts_one_or_two_digits() {
        for id in ["SEM1", "SEM09", "SEM12"] {
            assert!(FEEDBACK_SEMESTER_REGEX.is_match(id), "{id}");
        }
        for id in ["SEM", "SEM123", "sem12", "SEM1A", "2023-S1"] {
            assert!(!FEEDBACK_SEMESTER_REGEX.is_match(id), "{id}");
        }
    }
}
