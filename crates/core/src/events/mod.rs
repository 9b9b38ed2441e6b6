//! Events module - backend cash-flow events and their timeline annotations.
//!
//! Backend events carry a free-form `type`. It is classified into
//! [`EventCategory`] once, when the event is normalized for display.

mod events_grouping;
mod events_model;
mod events_service;
mod events_traits;

pub use events_grouping::*;
pub use events_model::*;
pub use events_service::*;
pub use events_traits::*;

#[cfg(test)]
mod events_grouping_tests;
