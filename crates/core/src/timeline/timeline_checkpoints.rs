use std::collections::BTreeSet;

use crate::constants::CHECKPOINT_INTERVAL_YEARS;

/// Years at which the timeline shows a value.
///
/// Every fifth year from `start_year` up to `end_year`, plus each event year
/// inside `[start_year, end_year]`. Ascending, without duplicates. Empty when
/// `start_year > end_year`.
pub fn checkpoint_years<I>(start_year: i32, end_year: i32, event_years: I) -> Vec<i32>
where
    I: IntoIterator<Item = i32>,
{
    if start_year > end_year {
        return Vec::new();
    }

    let mut years = BTreeSet::new();
    let mut year = start_year;
    while year <= end_year {
        years.insert(year);
        match year.checked_add(CHECKPOINT_INTERVAL_YEARS) {
            Some(next) => year = next,
            None => break,
        }
    }

    years.extend(
        event_years
            .into_iter()
            .filter(|year| (start_year..=end_year).contains(year)),
    );

    years.into_iter().collect()
}
