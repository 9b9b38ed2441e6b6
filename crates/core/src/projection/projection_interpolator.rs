//! Maps a sparse yearly projection onto arbitrary timeline years.

use rust_decimal::Decimal;

use super::projection_model::{ProjectionPoint, TimelineValue};
use crate::constants::DECIMAL_PRECISION;
use crate::formatting::compact_label;

/// Value of the projection at `year`, labelled for display.
///
/// Exact years return the backend value untouched. Years between two known
/// points are linearly interpolated. Years after the last point reuse the
/// last value. Years before the first point, and empty series, yield `None`.
pub fn value_at(year: i32, series: &[ProjectionPoint]) -> Option<TimelineValue> {
    let value = patrimony_at(year, series)?;
    Some(TimelineValue::new(value, compact_label(value)))
}

/// Raw total patrimony at `year`, without a label.
///
/// Does not rely on the input being sorted.
pub fn patrimony_at(year: i32, series: &[ProjectionPoint]) -> Option<Decimal> {
    if let Some(exact) = series.iter().find(|point| point.year == year) {
        return Some(exact.total_patrimony);
    }

    let before = series
        .iter()
        .filter(|point| point.year < year)
        .max_by_key(|point| point.year);
    let after = series
        .iter()
        .filter(|point| point.year > year)
        .min_by_key(|point| point.year);

    match (before, after) {
        (Some(before), Some(after)) => interpolate(year, before, after),
        (Some(before), None) => Some(before.total_patrimony),
        // No backward extrapolation
        (None, _) => None,
    }
}

fn interpolate(year: i32, before: &ProjectionPoint, after: &ProjectionPoint) -> Option<Decimal> {
    let span = Decimal::from(i64::from(after.year) - i64::from(before.year));
    let ratio = Decimal::from(i64::from(year) - i64::from(before.year)).checked_div(span)?;
    let delta = after
        .total_patrimony
        .checked_sub(before.total_patrimony)?
        .checked_mul(ratio)?;

    before
        .total_patrimony
        .checked_add(delta)
        .map(|value| value.round_dp(DECIMAL_PRECISION))
}
