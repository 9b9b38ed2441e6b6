//! Projection domain models.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One yearly snapshot of the backend projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: i32,
    pub total_patrimony: Decimal,
    pub financial_patrimony: Decimal,
    pub immobilized_patrimony: Decimal,
    pub total_without_insurance: Decimal,
}

/// A value shown on the timeline together with its rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineValue {
    pub value: Decimal,
    pub label: String,
}

impl TimelineValue {
    pub fn new(value: Decimal, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Projection series ordered by year with no duplicate years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionSeries(Vec<ProjectionPoint>);

impl ProjectionSeries {
    /// Builds a series from backend points.
    ///
    /// The backend already sends ascending unique years; anything else is
    /// repaired here (sorted, first point per year wins) and logged.
    pub fn new(mut points: Vec<ProjectionPoint>) -> Self {
        let already_ordered = points.windows(2).all(|pair| pair[0].year < pair[1].year);
        if already_ordered {
            return Self(points);
        }

        warn!(
            "Projection series with {} points is not strictly ascending by year; normalizing",
            points.len()
        );
        points.sort_by_key(|point| point.year);
        let mut seen = HashSet::new();
        points.retain(|point| seen.insert(point.year));
        Self(points)
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.0.first().map(|point| point.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.0.last().map(|point| point.year)
    }
}

impl From<Vec<ProjectionPoint>> for ProjectionSeries {
    fn from(points: Vec<ProjectionPoint>) -> Self {
        Self::new(points)
    }
}
