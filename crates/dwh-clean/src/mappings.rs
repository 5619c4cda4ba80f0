//! Categorical mapping tables.
//!
//! Each table maps a normalized raw spelling to its canonical label. Keys are
//! matched after the per-field normalization noted on each constant; adding a
//! variant is a one-line change here.

/// Gender, keyed by lower-cased value.
pub const GENDER: &[(&str, &str)] = &[
    ("f", "Female"),
    ("female", "Female"),
    ("m", "Male"),
    ("male", "Male"),
    ("o", "Other"),
    ("other", "Other"),
];
pub const GENDER_UNKNOWN: &str = "Unknown";

/// Attendance status, keyed by upper-cased value.
pub const ATTENDANCE_STATUS: &[(&str, &str)] = &[
    ("P", "PRESENT"),
    ("PRESENT", "PRESENT"),
    ("A", "ABSENT"),
    ("ABSENT", "ABSENT"),
    ("L", "LATE"),
    ("LATE", "LATE"),
];
pub const ATTENDANCE_UNKNOWN: &str = "UNKNOWN";

/// Exam type, keyed by lower-cased value.
pub const EXAM_TYPE: &[(&str, &str)] = &[
    ("mid", "Midterm"),
    ("midterm", "Midterm"),
    ("final", "Final"),
    ("quiz", "Quiz"),
    ("assessment", "Assessment"),
];
pub const EXAM_TYPE_UNKNOWN: &str = "Unknown";

/// Teaching role, keyed by lower-cased value.
pub const ROLE: &[(&str, &str)] = &[
    ("instructor", "Instructor"),
    ("ta", "Teaching Assistant"),
    ("teaching assistant", "Teaching Assistant"),
];
pub const ROLE_UNKNOWN: &str = "Unknown";

/// Semester term, keyed by lower-cased value.
pub const TERM: &[(&str, &str)] = &[
    ("sprng", "Spring"),
    ("spring", "Spring"),
    ("summer", "Summer"),
    ("fall", "Fall"),
    ("winter", "Winter"),
];
pub const TERM_UNKNOWN: &str = "Unknown";

/// Enrollment status, keyed by lower-cased value.
pub const ENROLLMENT_STATUS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("dropped", "Dropped"),
    ("completed", "Completed"),
];
pub const ENROLLMENT_STATUS_UNKNOWN: &str = "Unknown";

/// How a raw value is normalized before table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Lower,
    Upper,
}

/// A mapping table with its key normalization and fallback label.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMap {
    pub table: &'static [(&'static str, &'static str)],
    pub key_case: KeyCase,
    pub unknown: &'static str,
}

impl CategoryMap {
    pub const fn new(
        table: &'static [(&'static str, &'static str)],
        key_case: KeyCase,
        unknown: &'static str,
    ) -> Self {
        Self {
            table,
            key_case,
            unknown,
        }
    }

    /// Canonical label for a raw value, or `None` when the value is not mapped.
    pub fn lookup(&self, raw: &str) -> Option<&'static str> {
        let trimmed = raw.trim();
        let key = match self.key_case {
            KeyCase::Lower => trimmed.to_lowercase(),
            KeyCase::Upper => trimmed.to_uppercase(),
        };
        self.table
            .iter()
            .find(|(variant, _)| *variant == key)
            .map(|(_, canonical)| *canonical)
    }

    /// Canonical label, falling back to the unknown label for anything else.
    pub fn canonicalize(&self, raw: Option<&str>) -> &'static str {
        raw.and_then(|value| self.lookup(value))
            .unwrap_or(self.unknown)
    }

    /// Every label this field may hold after cleaning.
    pub fn domain(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.table.iter().map(|(_, c)| *c).collect();
        labels.push(self.unknown);
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

pub const GENDER_MAP: CategoryMap = CategoryMap::new(GENDER, KeyCase::Lower, GENDER_UNKNOWN);
pub const ATTENDANCE_STATUS_MAP: CategoryMap =
    CategoryMap::new(ATTENDANCE_STATUS, KeyCase::Upper, ATTENDANCE_UNKNOWN);
pub const EXAM_TYPE_MAP: CategoryMap =
    CategoryMap::new(EXAM_TYPE, KeyCase::Lower, EXAM_TYPE_UNKNOWN);
pub const ROLE_MAP: CategoryMap = CategoryMap::new(ROLE, KeyCase::Lower, ROLE_UNKNOWN);
pub const TERM_MAP: CategoryMap = CategoryMap::new(TERM, KeyCase::Lower, TERM_UNKNOWN);
pub const ENROLLMENT_STATUS_MAP: CategoryMap =
    CategoryMap::new(ENROLLMENT_STATUS, KeyCase::Lower, ENROLLMENT_STATUS_UNKNOWN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_variants() {
        assert_eq!(GENDER_MAP.canonicalize(Some(" f ")), "Female");
        assert_eq!(GENDER_MAP.canonicalize(Some("MALE")), "Male");
        assert_eq!(GENDER_MAP.canonicalize(Some("O")), "Other");
        assert_eq!(GENDER_MAP.canonicalize(Some("x")), "Unknown");
        assert_eq!(GENDER_MAP.canonicalize(None), "Unknown");
    }

    #[test]
    fn test_attendance_status() {
        assert_eq!(ATTENDANCE_STATUS_MAP.lookup("p"), Some("PRESENT"));
        assert_eq!(ATTENDANCE_STATUS_MAP.lookup(" late "), Some("LATE"));
        assert_eq!(ATTENDANCE_STATUS_MAP.canonicalize(Some("excused")), "UNKNOWN");
    }

    #[test]
    fn test_exam_role_term_status() {
        assert_eq!(EXAM_TYPE_MAP.canonicalize(Some("MID")), "Midterm");
        assert_eq!(ROLE_MAP.canonicalize(Some("TA")), "Teaching Assistant");
        assert_eq!(TERM_MAP.canonicalize(Some("Sprng")), "Spring");
        assert_eq!(TERM_MAP.canonicalize(Some("autumn")), "Unknown");
        assert_eq!(ENROLLMENT_STATUS_MAP.canonicalize(Some("COMPLETED")), "Completed");
    }

    #[test]
    fn test_domains_include_unknown() {
        assert_eq!(GENDER_MAP.domain(), vec!["Female", "Male", "Other", "Unknown"]);
        assert_eq!(
            ATTENDANCE_STATUS_MAP.domain(),
            vec!["ABSENT", "LATE", "PRESENT", "UNKNOWN"]
        );
    }

    #[test]
    fn test_keys_are_normalized() {
        for map in [
            GENDER_MAP,
            EXAM_TYPE_MAP,
            ROLE_MAP,
            TERM_MAP,
            ENROLLMENT_STATUS_MAP,
        ] {
            for (key, _) in map.table {
                assert_eq!(*key, key.to_lowercase());
            }
        }
        for (key, _) in ATTENDANCE_STATUS {
            assert_eq!(*key, key.to_uppercase());
        }
    }
}
