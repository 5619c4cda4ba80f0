use std::collections::HashSet;

use dwh_ingest::{column_values, format_numeric, parse_f64, string_column};
use dwh_model::{CleanReport, DropReason, Entity, RepairReason};
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use regex::Regex;
use tracing::{debug, info};

use crate::cleaner_trait::CleanOutcome;
use crate::datetime::{SlashOrder, normalize_date};
use crate::error::{CleanError, Result};
use crate::mappings::CategoryMap;

const NULL_KEY: &str = "\u{0}";
const KEY_SEPARATOR: char = '\u{1f}';

/// An entity frame being cleaned, with its running report.
pub(crate) struct CleaningFrame {
    entity: Entity,
    data: DataFrame,
    report: CleanReport,
}

impl CleaningFrame {
    /// Starts cleaning after checking the entity's required columns.
    pub(crate) fn new(entity: Entity, raw: &DataFrame) -> Result<Self> {
        for column in entity.required_columns() {
            if raw.column(column).is_err() {
                return Err(CleanError::MissingColumn {
                    entity,
                    column: (*column).to_string(),
                });
            }
        }
        Ok(Self {
            entity,
            data: raw.clone(),
            report: CleanReport::new(entity, raw.height()),
        })
    }

    pub(crate) fn height(&self) -> usize {
        self.data.height()
    }

    pub(crate) fn values(&self, column: &str) -> Result<Vec<Option<String>>> {
        Ok(column_values(&self.data, column)?)
    }

    /// Trimmed values; whitespace-only cells read as missing.
    pub(crate) fn trimmed(&self, column: &str) -> Result<Vec<Option<String>>> {
        Ok(self
            .values(column)?
            .into_iter()
            .map(|value| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
            .collect())
    }

    pub(crate) fn set(&mut self, column: &str, values: Vec<Option<String>>) -> Result<()> {
        self.data.with_column(string_column(column, values))?;
        Ok(())
    }

    pub(crate) fn trim(&mut self, columns: &[&str]) -> Result<()> {
        for column in columns {
            let values = self.trimmed(column)?;
            self.set(column, values)?;
        }
        Ok(())
    }

    /// Trims and replaces missing cells with `default`.
    pub(crate) fn fill_default(&mut self, column: &'static str, default: &str) -> Result<()> {
        let mut filled = 0;
        let values = self
            .trimmed(column)?
            .into_iter()
            .map(|value| {
                value.or_else(|| {
                    filled += 1;
                    Some(default.to_string())
                })
            })
            .collect();
        self.set(column, values)?;
        self.report
            .record_repair(RepairReason::DefaultFilled(column), filled);
        Ok(())
    }

    /// Rewrites dates as ISO; unparseable dates become missing.
    pub(crate) fn parse_dates(&mut self, column: &'static str, order: SlashOrder) -> Result<()> {
        let mut unparseable = 0;
        let values = self
            .values(column)?
            .into_iter()
            .map(|value| {
                let raw = value?;
                let parsed = normalize_date(&raw, order);
                if parsed.is_none() {
                    unparseable += 1;
                }
                parsed
            })
            .collect();
        self.set(column, values)?;
        self.report
            .record_repair(RepairReason::UnparseableDate(column), unparseable);
        Ok(())
    }

    /// Maps every cell through `map`; missing and unmapped cells get its unknown label.
    pub(crate) fn canonicalize(&mut self, column: &'static str, map: &CategoryMap) -> Result<()> {
        let mut canonicalized = 0;
        let mut unknown = 0;
        let mut filled = 0;
        let values = self
            .trimmed(column)?
            .into_iter()
            .map(|value| {
                let label = match value.as_deref() {
                    None => {
                        filled += 1;
                        map.unknown
                    }
                    Some(raw) => match map.lookup(raw) {
                        Some(canonical) => {
                            if canonical != raw {
                                canonicalized += 1;
                            }
                            canonical
                        }
                        None => {
                            unknown += 1;
                            map.unknown
                        }
                    },
                };
                Some(label.to_string())
            })
            .collect();
        self.set(column, values)?;
        self.report
            .record_repair(RepairReason::Canonicalized(column), canonicalized);
        self.report
            .record_repair(RepairReason::UnknownCategory(column), unknown);
        self.report
            .record_repair(RepairReason::DefaultFilled(column), filled);
        Ok(())
    }

    /// Keeps rows where `keep` is true, counting the rest under `reason`.
    pub(crate) fn retain(&mut self, reason: DropReason, keep: &[bool]) -> Result<()> {
        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped == 0 {
            return Ok(());
        }
        let mask = BooleanChunked::from_slice("keep".into(), keep);
        self.data = self.data.filter(&mask)?;
        self.report.record_drop(reason, dropped);
        debug!(entity = %self.entity, %reason, dropped, "dropped rows");
        Ok(())
    }

    /// Drops rows whose trimmed value is missing.
    pub(crate) fn drop_missing(&mut self, column: &'static str) -> Result<()> {
        let keep: Vec<bool> = self.trimmed(column)?.iter().map(Option::is_some).collect();
        self.retain(DropReason::MissingRequired(column), &keep)
    }

    /// Drops rows whose value does not match `pattern`; missing values never match.
    pub(crate) fn drop_unmatched(&mut self, column: &'static str, pattern: &Regex) -> Result<()> {
        let keep: Vec<bool> = self
            .values(column)?
            .iter()
            .map(|value| value.as_deref().is_some_and(|v| pattern.is_match(v)))
            .collect();
        self.retain(DropReason::InvalidFormat(column), &keep)
    }

    /// Parses a numeric column; rows failing `valid` are dropped, the rest are rewritten.
    pub(crate) fn keep_numeric<F>(
        &mut self,
        column: &'static str,
        reason: DropReason,
        valid: F,
    ) -> Result<()>
    where
        F: Fn(f64) -> bool,
    {
        let parsed: Vec<Option<f64>> = self
            .values(column)?
            .iter()
            .map(|value| value.as_deref().and_then(parse_f64).filter(|v| valid(*v)))
            .collect();
        let values = parsed.iter().map(|v| v.map(format_numeric)).collect();
        self.set(column, values)?;
        let keep: Vec<bool> = parsed.iter().map(Option::is_some).collect();
        self.retain(reason, &keep)
    }

    /// Drops rows identical in every column to an earlier row.
    pub(crate) fn dedupe_rows(&mut self) -> Result<()> {
        let columns: Vec<String> = self
            .data
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        let keep = self.first_occurrences(&columns)?;
        self.retain(DropReason::DuplicateRow, &keep)
    }

    /// Collapses rows sharing the entity's natural key to the first occurrence.
    pub(crate) fn dedupe_natural_key(&mut self) -> Result<()> {
        let key: Vec<String> = self
            .entity
            .natural_key()
            .iter()
            .map(|column| (*column).to_string())
            .collect();
        if key.is_empty() {
            return Ok(());
        }
        let keep = self.first_occurrences(&key)?;
        self.retain(DropReason::DuplicateKey, &keep)
    }

    fn first_occurrences(&self, columns: &[String]) -> Result<Vec<bool>> {
        let mut key_columns = Vec::with_capacity(columns.len());
        for column in columns {
            key_columns.push(self.values(column)?);
        }
        let mut seen: HashSet<String> = HashSet::with_capacity(self.height());
        let mut keep = Vec::with_capacity(self.height());
        for idx in 0..self.height() {
            let mut key = String::new();
            for values in &key_columns {
                key.push_str(values[idx].as_deref().unwrap_or(NULL_KEY));
                key.push(KEY_SEPARATOR);
            }
            keep.push(seen.insert(key));
        }
        Ok(keep)
    }

    pub(crate) fn report_mut(&mut self) -> &mut CleanReport {
        &mut self.report
    }

    pub(crate) fn finish(self) -> CleanOutcome {
        let Self {
            entity,
            data,
            mut report,
        } = self;
        report.finish(data.height());
        info!(
            entity = %entity,
            rows_in = report.rows_in,
            rows_out = report.rows_out,
            dropped = report.dropped_total(),
            repaired = report.repaired_total(),
            "cleaned"
        );
        CleanOutcome { data, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(entity: Entity, columns: &[(&str, &[Option<&str>])]) -> CleaningFrame {
        let columns = columns
            .iter()
            .map(|(name, values)| {
                string_column(
                    name,
                    values.iter().map(|v| v.map(str::to_string)).collect(),
                )
            })
            .collect();
        CleaningFrame::new(entity, &DataFrame::new(columns).unwrap()).unwrap()
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let df = DataFrame::new(vec![string_column("GradeID", vec![Some("G1".into())])]).unwrap();
        let result = CleaningFrame::new(Entity::Grade, &df);
        assert!(matches!(result, Err(CleanError::MissingColumn { .. })));
    }

    #[test]
    fn test_dedupe_treats_missing_as_equal() {
        let mut work = frame(
            Entity::CoursePrerequisite,
            &[
                ("CourseID", &[Some("C1"), Some("C1"), Some("C1")]),
                ("PrerequisiteCourseID", &[None, None, Some("")]),
            ],
        );
        work.dedupe_rows().unwrap();
        assert_eq!(work.height(), 1);
        assert_eq!(work.report.dropped_count(DropReason::DuplicateRow), 2);
    }

    #[test]
    fn test_fill_default_counts_repairs() {
        let mut work = frame(
            Entity::Department,
            &[
                ("DepartmentID", &[Some("D1"), Some("D2")]),
                ("DepartmentName", &[Some(" Physics "), Some("  ")]),
                ("Location", &[None, None]),
            ],
        );
        work.fill_default("DepartmentName", "Unknown").unwrap();
        assert_eq!(
            work.values("DepartmentName").unwrap(),
            vec![Some("Physics".to_string()), Some("Unknown".to_string())]
        );
        assert_eq!(
            work.report
                .repaired_count(RepairReason::DefaultFilled("DepartmentName")),
            1
        );
    }
}
