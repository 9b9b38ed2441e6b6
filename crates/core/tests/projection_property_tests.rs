//! Property-based tests for the timeline projector.
//!
//! These tests verify that interpolation and checkpoint generation hold their
//! guarantees across random inputs, using the `proptest` crate.

use patrimony_core::projection::{patrimony_at, value_at, ProjectionPoint};
use patrimony_core::timeline::checkpoint_years;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

// =============================================================================
// Generators
// =============================================================================

/// Generates a money amount with cents, up to one billion.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a series sorted by year with unique years.
fn arb_series() -> impl Strategy<Value = Vec<ProjectionPoint>> {
    proptest::collection::btree_map(2000i32..2100, arb_amount(), 1..12).prop_map(|by_year| {
        by_year
            .into_iter()
            .map(|(year, total)| ProjectionPoint {
                year,
                total_patrimony: total,
                financial_patrimony: total,
                immobilized_patrimony: Decimal::ZERO,
                total_without_insurance: total,
            })
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Interpolated values lie between the two bounding points.
    #[test]
    fn prop_interpolation_is_bounded_by_neighbours(
        series in arb_series(),
        pick in any::<proptest::sample::Index>(),
    ) {
        let first = series.first().unwrap().year;
        let last = series.last().unwrap().year;
        if last - first < 2 {
            return Ok(());
        }
        let year = first + 1 + pick.index((last - first - 1) as usize) as i32;

        let before = series.iter().filter(|p| p.year <= year).last().unwrap();
        let after = series.iter().find(|p| p.year >= year).unwrap();
        let low = before.total_patrimony.min(after.total_patrimony);
        let high = before.total_patrimony.max(after.total_patrimony);

        let value = patrimony_at(year, &series).unwrap();
        prop_assert!(value >= low && value <= high, "{} not in [{}, {}]", value, low, high);
    }

    /// Between two consecutive points the curve moves in one direction only.
    #[test]
    fn prop_interpolation_is_monotonic_between_points(series in arb_series()) {
        for pair in series.windows(2) {
            let increasing = pair[1].total_patrimony >= pair[0].total_patrimony;
            let mut previous = pair[0].total_patrimony;
            for year in pair[0].year + 1..=pair[1].year {
                let value = patrimony_at(year, &series).unwrap();
                if increasing {
                    prop_assert!(value >= previous);
                } else {
                    prop_assert!(value <= previous);
                }
                previous = value;
            }
        }
    }

    /// Known years return the backend value exactly.
    #[test]
    fn prop_exact_years_short_circuit(series in arb_series()) {
        for point in &series {
            let value = value_at(point.year, &series).unwrap();
            prop_assert_eq!(value.value, point.total_patrimony);
        }
    }

    /// Nothing before the first point; the last value after the last point.
    #[test]
    fn prop_extrapolation_rules(series in arb_series(), gap in 1i32..50) {
        let first = series.first().unwrap();
        let last = series.last().unwrap();

        prop_assert!(value_at(first.year - gap, &series).is_none());
        prop_assert_eq!(
            value_at(last.year + gap, &series).map(|v| v.value),
            Some(last.total_patrimony)
        );
    }

    /// Checkpoints are sorted, unique, in range and contain the whole grid.
    #[test]
    fn prop_checkpoints_are_sorted_unique_and_in_range(
        start in 1990i32..2050,
        length in 0i32..80,
        events in proptest::collection::vec(1950i32..2150, 0..20),
    ) {
        let end = start + length;
        let years = checkpoint_years(start, end, events.iter().copied());

        prop_assert!(years.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(years.iter().all(|year| *year >= start && *year <= end));

        let as_set: BTreeSet<i32> = years.iter().copied().collect();
        for grid_year in (start..=end).step_by(5) {
            prop_assert!(as_set.contains(&grid_year));
        }
        for event_year in events.iter().filter(|y| **y >= start && **y <= end) {
            prop_assert!(as_set.contains(event_year));
        }
    }
}

// =============================================================================
// Example Tests
// =============================================================================

#[test]
fn test_documented_checkpoint_examples() {
    assert_eq!(
        checkpoint_years(2025, 2060, []),
        vec![2025, 2030, 2035, 2040, 2045, 2050, 2055, 2060]
    );
    assert_eq!(
        checkpoint_years(2025, 2060, [2027, 2052]),
        vec![2025, 2027, 2030, 2035, 2040, 2045, 2050, 2052, 2055, 2060]
    );
}

#[test]
fn test_empty_series_has_no_value() {
    assert!(value_at(2030, &[]).is_none());
}
