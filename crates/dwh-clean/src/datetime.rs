//! Lenient date parsing with ISO output.

use chrono::{NaiveDate, NaiveDateTime};

/// Output format for every cleaned date.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Field order of `a/b/YYYY` dates, which is ambiguous without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashOrder {
    /// `DD/MM/YYYY`
    DayFirst,
    /// `MM/DD/YYYY`
    MonthFirst,
}

impl SlashOrder {
    fn format(self) -> &'static str {
        match self {
            SlashOrder::DayFirst => "%d/%m/%Y",
            SlashOrder::MonthFirst => "%m/%d/%Y",
        }
    }
}

/// Parses a date in any accepted layout. Impossible calendar dates yield `None`.
pub fn parse_date(value: &str, order: SlashOrder) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS.iter().copied().chain([order.format()]) {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|datetime| datetime.date())
}

/// Parses and re-renders a date as `YYYY-MM-DD`.
pub fn normalize_date(value: &str, order: SlashOrder) -> Option<String> {
    parse_date(value, order).map(|date| date.format(ISO_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_and_datetime_inputs() {
        assert_eq!(
            normalize_date("2023-06-01", SlashOrder::MonthFirst).as_deref(),
            Some("2023-06-01")
        );
        assert_eq!(
            normalize_date("2023-06-01 08:30:00", SlashOrder::MonthFirst).as_deref(),
            Some("2023-06-01")
        );
        assert_eq!(
            normalize_date("2023/06/01", SlashOrder::DayFirst).as_deref(),
            Some("2023-06-01")
        );
    }

    #[test]
    fn test_slash_order() {
        assert_eq!(
            normalize_date("03/04/2001", SlashOrder::DayFirst).as_deref(),
            Some("2001-04-03")
        );
        assert_eq!(
            normalize_date("03/04/2001", SlashOrder::MonthFirst).as_deref(),
            Some("2001-03-04")
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date("31/02/2000", SlashOrder::DayFirst), None);
        assert_eq!(parse_date("not a date", SlashOrder::MonthFirst), None);
        assert_eq!(parse_date("", SlashOrder::MonthFirst), None);
    }
}
