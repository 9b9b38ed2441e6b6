use async_trait::async_trait;

use super::events_model::{Event, EventCreateData};
use crate::errors::Result;

/// Access to the events of a simulation version.
#[async_trait]
pub trait EventApiTrait: Send + Sync {
    async fn list_events_for_version(&self, version_id: i64) -> Result<Vec<Event>>;

    async fn get_event(&self, event_id: i64) -> Result<Event>;

    /// Events are created under a simulation; the backend attaches them to
    /// its current version.
    async fn create_event(&self, simulation_id: i64, data: &EventCreateData) -> Result<Event>;

    async fn update_event(&self, event_id: i64, data: &EventCreateData) -> Result<Event>;

    async fn delete_event(&self, event_id: i64) -> Result<()>;
}
