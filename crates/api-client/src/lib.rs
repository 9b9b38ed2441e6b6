//! Patrimony API client - REST access to the planning backend.
//!
//! Implements the collaborator traits defined by `patrimony-core` on top of
//! `reqwest`, so the dashboard services never touch HTTP directly.

mod client;
mod config;

pub use client::{decode_body, decode_list, PlanningApiClient};
pub use config::{ApiClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};
