//! Statistics used to repair numeric sentinels and missing categories.

use std::collections::BTreeMap;

/// Median of the values; the mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Most frequent value; ties go to the smallest.
pub fn mode(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut best: Option<(f64, usize)> = None;
    let mut idx = 0;
    while idx < sorted.len() {
        let value = sorted[idx];
        let run = sorted[idx..].iter().take_while(|v| **v == value).count();
        if best.is_none_or(|(_, count)| run > count) {
            best = Some((value, run));
        }
        idx += run;
    }
    best.map(|(value, _)| value)
}

/// Mode of the numeric values observed for each category, in category name order.
pub fn category_modes<'a, I>(observations: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (category, value) in observations {
        grouped.entry(category.to_string()).or_default().push(value);
    }
    grouped
        .into_iter()
        .filter_map(|(category, values)| mode(&values).map(|m| (category, m)))
        .collect()
}

/// Category whose mode is closest to `value`; ties go to the first category.
pub fn nearest_mode_category(modes: &BTreeMap<String, f64>, value: f64) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (category, mode) in modes {
        let distance = (mode - value).abs();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((category.as_str(), distance));
        }
    }
    best.map(|(category, _)| category)
}
