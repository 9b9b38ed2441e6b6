//! Timeline module - checkpoint years, projected values and event annotations.
//!
//! The timeline shows a value on a regular grid of checkpoint years plus every
//! year that carries an event. Values come from the backend projection,
//! interpolated where needed, or from a fixed illustrative table when the
//! backend has no data.

mod timeline_builder;
mod timeline_checkpoints;
mod timeline_fallback;
mod timeline_memo;
mod timeline_model;

pub use timeline_builder::*;
pub use timeline_checkpoints::*;
pub use timeline_fallback::*;
pub use timeline_memo::*;
pub use timeline_model::*;
