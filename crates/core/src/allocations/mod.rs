//! Allocations module - manually tracked financial and real-estate assets.

mod allocations_model;
mod allocations_service;
mod allocations_traits;

pub use allocations_model::*;
pub use allocations_service::*;
pub use allocations_traits::*;

#[cfg(test)]
mod allocations_service_tests;
