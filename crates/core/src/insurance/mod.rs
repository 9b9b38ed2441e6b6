//! Insurance module - policies attached to a simulation version and their summary.

mod insurance_model;
mod insurance_service;
mod insurance_summary;
mod insurance_traits;

pub use insurance_model::*;
pub use insurance_service::*;
pub use insurance_summary::*;
pub use insurance_traits::*;
