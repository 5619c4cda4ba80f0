//! Row accounting for each pipeline stage.
//!
//! Cleaners never fail on bad rows; they drop or repair them. These reports
//! make those decisions visible to the caller instead of leaving them in log
//! lines only.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::entity::Entity;

/// Why a row was removed during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DropReason {
    /// An essential field was missing or unparseable.
    MissingRequired(&'static str),
    /// A field failed its format predicate (e.g. semester code pattern).
    InvalidFormat(&'static str),
    /// A field carried an `INVALID_*` sentinel.
    SentinelValue(&'static str),
    /// A numeric field that must be positive was zero, negative or missing.
    NonPositive(&'static str),
    /// The row references itself (course is its own prerequisite).
    SelfReference,
    /// Exact duplicate of an earlier row.
    DuplicateRow,
    /// Same natural key as an earlier row.
    DuplicateKey,
    /// A sentinel needed a median but no valid values existed.
    NoMedianAvailable(&'static str),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(column) => write!(f, "missing {column}"),
            Self::InvalidFormat(column) => write!(f, "invalid {column} format"),
            Self::SentinelValue(column) => write!(f, "sentinel {column}"),
            Self::NonPositive(column) => write!(f, "non-positive {column}"),
            Self::SelfReference => f.write_str("self reference"),
            Self::DuplicateRow => f.write_str("duplicate row"),
            Self::DuplicateKey => f.write_str("duplicate key"),
            Self::NoMedianAvailable(column) => write!(f, "no median for {column}"),
        }
    }
}

/// How a value was rewritten during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RepairReason {
    /// Missing value replaced by the field default.
    DefaultFilled(&'static str),
    /// Known variant rewritten to its canonical label.
    Canonicalized(&'static str),
    /// Value outside the known vocabulary replaced by the unknown label.
    UnknownCategory(&'static str),
    /// Non-empty date that could not be parsed, now null.
    UnparseableDate(&'static str),
    /// Negative number clamped to zero.
    ClampedNegative(&'static str),
    /// Sentinel or invalid number replaced by the column median.
    MedianImputed(&'static str),
    /// Missing category inferred from the nearest per-category mode.
    NearestModeImputed(&'static str),
}

impl fmt::Display for RepairReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultFilled(column) => write!(f, "default {column}"),
            Self::Canonicalized(column) => write!(f, "canonical {column}"),
            Self::UnknownCategory(column) => write!(f, "unknown {column}"),
            Self::UnparseableDate(column) => write!(f, "unparseable {column}"),
            Self::ClampedNegative(column) => write!(f, "clamped {column}"),
            Self::MedianImputed(column) => write!(f, "median {column}"),
            Self::NearestModeImputed(column) => write!(f, "nearest-mode {column}"),
        }
    }
}

fn serialize_counts<S, K>(counts: &BTreeMap<K, usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    K: fmt::Display,
{
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (reason, count) in counts {
        map.serialize_entry(&reason.to_string(), count)?;
    }
    map.end()
}

/// Outcome of cleaning one entity table.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub entity: Entity,
    pub rows_in: usize,
    pub rows_out: usize,
    #[serde(serialize_with = "serialize_counts")]
    pub dropped: BTreeMap<DropReason, usize>,
    #[serde(serialize_with = "serialize_counts")]
    pub repaired: BTreeMap<RepairReason, usize>,
}

impl CleanReport {
    pub fn new(entity: Entity, rows_in: usize) -> Self {
        Self {
            entity,
            rows_in,
            rows_out: rows_in,
            dropped: BTreeMap::new(),
            repaired: BTreeMap::new(),
        }
    }

    pub fn record_drop(&mut self, reason: DropReason, count: usize) {
        if count > 0 {
            *self.dropped.entry(reason).or_default() += count;
        }
    }

    pub fn record_repair(&mut self, reason: RepairReason, count: usize) {
        if count > 0 {
            *self.repaired.entry(reason).or_default() += count;
        }
    }

    pub fn finish(&mut self, rows_out: usize) {
        self.rows_out = rows_out;
    }

    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }

    pub fn repaired_total(&self) -> usize {
        self.repaired.values().sum()
    }

    pub fn dropped_count(&self, reason: DropReason) -> usize {
        self.dropped.get(&reason).copied().unwrap_or(0)
    }

    pub fn repaired_count(&self, reason: RepairReason) -> usize {
        self.repaired.get(&reason).copied().unwrap_or(0)
    }

    /// Every input row is either in the output or accounted for by a drop reason.
    pub fn is_balanced(&self) -> bool {
        self.rows_in == self.rows_out + self.dropped_total()
    }
}

/// Row counts along the assembler's join chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    pub enrollment_rows: usize,
    pub assignment_rows: usize,
    /// Rows after the enrollment/assignment inner join.
    pub spine_rows: usize,
    /// Rows after the inner join with students.
    pub student_joined_rows: usize,
    pub date_dimension_rows: usize,
    pub fact_rows: usize,
    pub missing_date_id: usize,
    pub exam_zero_filled: usize,
    pub attendance_unrecorded: usize,
    pub feedback_unrecorded: usize,
    pub dropout_flagged: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate_and_balance() {
        let mut report = CleanReport::new(Entity::Grade, 5);
        report.record_drop(DropReason::InvalidFormat("ScoreRange"), 1);
        report.record_drop(DropReason::DuplicateRow, 1);
        report.record_drop(DropReason::DuplicateRow, 0);
        report.record_repair(RepairReason::DefaultFilled("Grade"), 2);
        report.finish(3);

        assert_eq!(report.dropped_total(), 2);
        assert_eq!(report.dropped_count(DropReason::DuplicateRow), 1);
        assert_eq!(report.dropped.len(), 2);
        assert_eq!(report.repaired_total(), 2);
        assert!(report.is_balanced());
    }

    #[test]
    fn reasons_render_column_names() {
        assert_eq!(
            DropReason::InvalidFormat("SemesterID").to_string(),
            "invalid SemesterID format"
        );
        assert_eq!(
            RepairReason::NearestModeImputed("ResourceType").to_string(),
            "nearest-mode ResourceType"
        );
    }
}
