//! Illustrative values shown when the backend has no projection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::events::{EventCategory, TimelineEvent};
use crate::projection::TimelineValue;
use crate::simulations::LifeStatus;

const FALLBACK_TIMELINE: [(i32, Decimal, &str); 8] = [
    (2025, dec!(0), "Início"),
    (2030, dec!(3200000), "R$ 3,2M"),
    (2035, dec!(4500000), "R$ 4,5M"),
    (2040, dec!(6000000), "R$ 6,0M"),
    (2045, dec!(7500000), "R$ 7,5M"),
    (2050, dec!(9000000), "R$ 9,0M"),
    (2055, dec!(10500000), "R$ 10,5M"),
    (2060, dec!(12000000), "R$ 12,0M"),
];

/// Fallback value for `year`, if the table has one.
pub fn fallback_value(year: i32) -> Option<TimelineValue> {
    FALLBACK_TIMELINE
        .iter()
        .find(|(table_year, _, _)| *table_year == year)
        .map(|(_, value, label)| TimelineValue::new(*value, *label))
}

/// Annotations shown when a version has no events.
///
/// Retirement only appears for the `Alive` scenario.
pub fn default_timeline_events(status: LifeStatus) -> Vec<TimelineEvent> {
    let mut events = vec![TimelineEvent {
        year: 2025,
        category: EventCategory::Income,
        label: "CLT".to_string(),
        amount_description: "R$ 15.000".to_string(),
    }];

    if status == LifeStatus::Alive {
        events.push(TimelineEvent {
            year: 2055,
            category: EventCategory::Income,
            label: "Aposentadoria".to_string(),
            amount_description: "R$ 25.000".to_string(),
        });
    }

    events
}
