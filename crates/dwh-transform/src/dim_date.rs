//! Admission date dimension.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};
use dwh_model::DimDateRow;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One row per distinct parseable admission date, ascending, keyed 1..N.
pub fn build_dim_date<'a, I>(admission_dates: I) -> Vec<DimDateRow>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let distinct: BTreeSet<NaiveDate> = admission_dates
        .into_iter()
        .flatten()
        .filter_map(|value| NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok())
        .collect();

    distinct
        .into_iter()
        .zip(1u32..)
        .map(|(date, date_id)| DimDateRow {
            date_id,
            admission_date: date.format(ISO_DATE_FORMAT).to_string(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
        })
        .collect()
}

/// Lookup from ISO admission date to its DateID.
pub(crate) fn date_ids(rows: &[DimDateRow]) -> HashMap<&str, u32> {
    rows.iter()
        .map(|row| (row.admission_date.as_str(), row.date_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_sorted_dense() {
        let rows = build_dim_date([
            Some("2021-09-01"),
            None,
            Some("2020-01-15"),
            Some("2021-09-01"),
            Some("garbage"),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date_id, 1);
        assert_eq!(rows[0].admission_date, "2020-01-15");
        assert_eq!((rows[0].day, rows[0].month, rows[0].year), (15, 1, 2020));
        assert_eq!(rows[1].date_id, 2);
        assert_eq!(date_ids(&rows).get("2021-09-01"), Some(&2));
    }
}
