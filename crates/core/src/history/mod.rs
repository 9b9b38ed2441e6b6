//! History module - browsing, duplicating and deleting simulations.

mod history_model;
mod history_service;

pub use history_model::*;
pub use history_service::*;
