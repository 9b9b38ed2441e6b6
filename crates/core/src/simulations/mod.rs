//! Simulations module - simulations, versions, life status and selection.

mod simulations_model;
mod simulations_selection;
mod simulations_service;
mod simulations_traits;

pub use simulations_model::*;
pub use simulations_selection::*;
pub use simulations_service::*;
pub use simulations_traits::*;
