//! Assembles the timeline view from projection data and events.

use log::debug;
use std::sync::Arc;

use super::timeline_checkpoints::checkpoint_years;
use super::timeline_fallback::{default_timeline_events, fallback_value};
use super::timeline_memo::{interpolate_years, TimelineMemo, TimelineValues};
use super::timeline_model::{TimelineConfig, TimelineMarker, TimelineView};
use crate::events::{event_years, group_events_by_year, Event, EventsByYear};
use crate::projection::ProjectionSeries;
use crate::simulations::LifeStatus;

/// Builds the timeline without caching.
///
/// Never fails: an empty series switches to the fallback table and an empty
/// event list switches to the default annotations.
pub fn build_timeline(
    config: &TimelineConfig,
    series: &ProjectionSeries,
    events: &[Event],
    status: LifeStatus,
) -> TimelineView {
    assemble(config, series, events, status, |years| {
        Arc::new(interpolate_years(series, years))
    })
}

/// Timeline builder that memoizes interpolated values across calls.
#[derive(Debug, Default)]
pub struct TimelineProjector {
    memo: TimelineMemo,
}

impl TimelineProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(
        &self,
        config: &TimelineConfig,
        series: &ProjectionSeries,
        events: &[Event],
        status: LifeStatus,
    ) -> TimelineView {
        assemble(config, series, events, status, |years| {
            self.memo.values_for(series, years)
        })
    }

    pub fn memo(&self) -> &TimelineMemo {
        &self.memo
    }
}

fn assemble<F>(
    config: &TimelineConfig,
    series: &ProjectionSeries,
    events: &[Event],
    status: LifeStatus,
    projected_values: F,
) -> TimelineView
where
    F: FnOnce(&[i32]) -> Arc<TimelineValues>,
{
    let uses_default_events = events.is_empty();
    let events_by_year = if uses_default_events {
        let mut defaults = EventsByYear::new();
        for event in default_timeline_events(status) {
            defaults.entry(event.year).or_default().push(event);
        }
        defaults
    } else {
        group_events_by_year(events)
    };

    let years = checkpoint_years(
        config.start_year,
        config.end_year,
        event_years(&events_by_year),
    );

    let uses_fallback_values = series.is_empty();
    let values = if uses_fallback_values {
        debug!("No projection data, using fallback timeline values");
        None
    } else {
        Some(projected_values(&years))
    };

    let markers = years
        .iter()
        .map(|year| TimelineMarker {
            year: *year,
            position_percent: config.position_percent(*year),
            value: match &values {
                Some(values) => values.get(year).cloned(),
                None => fallback_value(*year),
            },
            events: events_by_year.get(year).cloned().unwrap_or_default(),
        })
        .collect();

    TimelineView {
        config: *config,
        markers,
        events_by_year,
        uses_fallback_values,
        uses_default_events,
    }
}
