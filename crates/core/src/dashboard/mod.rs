//! Dashboard module - loads everything the projection view renders.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::*;
pub use dashboard_service::*;
