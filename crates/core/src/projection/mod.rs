//! Projection module - backend projection series, interpolation and chart data.

mod projection_chart;
mod projection_interpolator;
mod projection_model;

pub use projection_chart::*;
pub use projection_interpolator::*;
pub use projection_model::*;
