use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::MISSING_DATE_PLACEHOLDER;
use crate::errors::Result;

/// Parses a backend date into the calendar date it was written with.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO timestamps.
/// Timestamps keep the calendar day of their own offset, so
/// `2030-01-01T00:00:00Z` is 1 January 2030 regardless of the host timezone.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();

    let plain = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d");
    if let Ok(date) = plain {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date());
    }

    // Report the error for the canonical format
    plain.map_err(Into::into)
}

/// Formats a backend date as `dd/MM/yy`.
///
/// Missing or unparseable dates render as `--/--/--`.
pub fn format_short_date(raw: Option<&str>) -> String {
    raw.filter(|value| !value.trim().is_empty())
        .and_then(|value| parse_calendar_date(value).ok())
        .map(|date| date.format("%d/%m/%y").to_string())
        .unwrap_or_else(|| MISSING_DATE_PLACEHOLDER.to_string())
}
