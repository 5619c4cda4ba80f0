/// Marker written in place of a metric that has no source rows.
pub const UNRECORDED_MARKER: &str = "Data Unrecorded";

/// A fact metric that was either measured or has no backing data.
///
/// Kept as a tagged value in memory; only the output boundary turns
/// `Unrecorded` into [`UNRECORDED_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Recorded(f64),
    Unrecorded,
}

impl Metric {
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(value) => Metric::Recorded(value),
            None => Metric::Unrecorded,
        }
    }

    pub fn is_recorded(self) -> bool {
        matches!(self, Metric::Recorded(_))
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        Metric::from_option(value)
    }
}
