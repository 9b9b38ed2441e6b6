//! Patrimony Core - domain models, the timeline projector and dashboard services.
//!
//! This crate is transport-agnostic. It defines the traits the REST client
//! implements (`SimulationApiTrait`, `EventApiTrait`, ...) and the pure
//! functions the presentation layer calls on every render.

pub mod allocations;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod formatting;
pub mod history;
pub mod insurance;
pub mod projection;
pub mod simulations;
pub mod timeline;
pub mod utils;

// Re-export the projector surface
pub use events::group_events_by_year;
pub use projection::value_at;
pub use timeline::checkpoint_years;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
