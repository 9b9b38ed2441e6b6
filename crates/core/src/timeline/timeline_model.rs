//! Timeline view models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMELINE_END_YEAR, DEFAULT_TIMELINE_START_YEAR};
use crate::errors::{Error, Result, ValidationError};
use crate::events::{EventsByYear, TimelineEvent};
use crate::projection::TimelineValue;

/// Year range covered by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_TIMELINE_START_YEAR,
            end_year: DEFAULT_TIMELINE_END_YEAR,
        }
    }
}

impl TimelineConfig {
    pub fn new(start_year: i32, end_year: i32) -> Result<Self> {
        let config = Self {
            start_year,
            end_year,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_year > self.end_year {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Timeline start year {} is after end year {}",
                self.start_year, self.end_year
            ))));
        }
        Ok(())
    }

    /// Horizontal position of `year`, in percent of the timeline width.
    pub fn position_percent(&self, year: i32) -> f64 {
        let span = i64::from(self.end_year) - i64::from(self.start_year);
        if span == 0 {
            return 0.0;
        }
        (i64::from(year) - i64::from(self.start_year)) as f64 / span as f64 * 100.0
    }
}

/// One checkpoint on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMarker {
    pub year: i32,
    pub position_percent: f64,
    /// Absent when neither projection nor fallback has a value for the year.
    pub value: Option<TimelineValue>,
    pub events: Vec<TimelineEvent>,
}

/// Everything the timeline renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub config: TimelineConfig,
    pub markers: Vec<TimelineMarker>,
    /// All annotations by year, including years outside the configured range.
    pub events_by_year: EventsByYear,
    /// Values come from the illustrative table rather than the backend.
    pub uses_fallback_values: bool,
    /// No events were supplied, so the default annotations are shown.
    pub uses_default_events: bool,
}

impl TimelineView {
    pub fn years(&self) -> Vec<i32> {
        self.markers.iter().map(|marker| marker.year).collect()
    }

    pub fn marker(&self, year: i32) -> Option<&TimelineMarker> {
        self.markers.iter().find(|marker| marker.year == year)
    }
}
