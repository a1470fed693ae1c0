//! Period filtering and selector option derivation.

use crate::feature::StationFeature;
use std::collections::BTreeSet;

/// Filter stations by Month/Year period.
///
/// An empty period means "All" and returns every station in load order.
/// Otherwise the match is exact and case-sensitive against the normalized
/// (trimmed) `month_year`; stations without a period never match.
pub fn filter_by_period<'a>(
    features: &'a [StationFeature],
    period: &str,
) -> Vec<&'a StationFeature> {
    if period.is_empty() {
        return features.iter().collect();
    }
    features
        .iter()
        .filter(|f| f.properties.month_year.as_deref() == Some(period))
        .collect()
}

/// Derive the distinct Month/Year values for the selector, sorted ascending.
///
/// Blank periods were already collapsed to `None` at parse time, so this is
/// a dedup + lexicographic sort. The UI prepends its own "All" option.
pub fn period_options(features: &[StationFeature]) -> Vec<String> {
    let distinct: BTreeSet<&str> = features
        .iter()
        .filter_map(|f| f.properties.month_year.as_deref())
        .collect();
    distinct.into_iter().map(String::from).collect()
}
