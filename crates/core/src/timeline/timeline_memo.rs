//! Memoized timeline values.
//!
//! Interpolation is cheap and pure, so the cache is only an optimization for
//! presentation layers that rebuild the timeline on every render.

use log::{debug, warn};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::projection::{value_at, ProjectionSeries, TimelineValue};

/// Interpolated values by checkpoint year.
pub type TimelineValues = BTreeMap<i32, TimelineValue>;

const DEFAULT_MEMO_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    series_fingerprint: u64,
    years: Vec<i32>,
}

/// Cache of interpolated values keyed on `(series, checkpoint years)`.
#[derive(Debug)]
pub struct TimelineMemo {
    entries: RwLock<HashMap<MemoKey, Arc<TimelineValues>>>,
    capacity: usize,
}

impl Default for TimelineMemo {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMO_CAPACITY)
    }
}

impl TimelineMemo {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Values for `years`, computed once per distinct series and year set.
    pub fn values_for(&self, series: &ProjectionSeries, years: &[i32]) -> Arc<TimelineValues> {
        let key = MemoKey {
            series_fingerprint: fingerprint(series),
            years: years.to_vec(),
        };

        if let Ok(entries) = self.entries.read() {
            if let Some(cached) = entries.get(&key) {
                return Arc::clone(cached);
            }
        }

        let computed = Arc::new(interpolate_years(series, years));

        match self.entries.write() {
            Ok(mut entries) => {
                if entries.len() >= self.capacity {
                    debug!("Timeline memo full ({} entries), clearing", entries.len());
                    entries.clear();
                }
                entries.insert(key, Arc::clone(&computed));
            }
            Err(e) => warn!("Timeline memo unavailable, serving uncached values: {}", e),
        }

        computed
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

/// Interpolates every year; years without a value are left out.
pub fn interpolate_years(series: &ProjectionSeries, years: &[i32]) -> TimelineValues {
    years
        .iter()
        .filter_map(|year| value_at(*year, series.points()).map(|value| (*year, value)))
        .collect()
}

fn fingerprint(series: &ProjectionSeries) -> u64 {
    let mut hasher = DefaultHasher::new();
    series.hash(&mut hasher);
    hasher.finish()
}
