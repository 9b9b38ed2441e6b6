//! Groups events by the year they start in.

use log::warn;
use std::collections::{BTreeMap, BTreeSet};

use super::events_model::{Event, TimelineEvent};

/// Events keyed by start year, ascending.
pub type EventsByYear = BTreeMap<i32, Vec<TimelineEvent>>;

/// Normalizes events and groups them by the calendar year of their start date.
///
/// Within a year the input order is kept. Events with an unreadable start
/// date are skipped so one bad record never hides the rest of the timeline.
pub fn group_events_by_year(events: &[Event]) -> EventsByYear {
    let mut grouped = EventsByYear::new();

    for event in events {
        match TimelineEvent::from_event(event) {
            Ok(timeline_event) => grouped
                .entry(timeline_event.year)
                .or_default()
                .push(timeline_event),
            Err(e) => warn!(
                "Skipping event {} ('{}') with unreadable start date '{}': {}",
                event.id,
                event.event_type,
                event.start_date.as_deref().unwrap_or(""),
                e
            ),
        }
    }

    grouped
}

/// Years that carry at least one event.
pub fn event_years(grouped: &EventsByYear) -> BTreeSet<i32> {
    grouped
        .iter()
        .filter(|(_, events)| !events.is_empty())
        .map(|(year, _)| *year)
        .collect()
}
