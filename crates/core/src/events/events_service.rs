//! Event service implementation.

use log::info;
use std::sync::Arc;

use super::events_model::{Event, EventCreateData};
use super::events_traits::EventApiTrait;
use crate::errors::Result;

/// Validates event edits before they reach the backend.
pub struct EventService {
    event_api: Arc<dyn EventApiTrait>,
}

impl EventService {
    pub fn new(event_api: Arc<dyn EventApiTrait>) -> Self {
        Self { event_api }
    }

    pub async fn get(&self, event_id: i64) -> Result<Event> {
        self.event_api.get_event(event_id).await
    }

    pub async fn create(&self, simulation_id: i64, data: EventCreateData) -> Result<Event> {
        data.validate()?;
        let created = self.event_api.create_event(simulation_id, &data).await?;
        info!(
            "Created event {} ('{}') for simulation {}",
            created.id, created.event_type, simulation_id
        );
        Ok(created)
    }

    pub async fn update(&self, event_id: i64, data: EventCreateData) -> Result<Event> {
        data.validate()?;
        self.event_api.update_event(event_id, &data).await
    }

    pub async fn delete(&self, event_id: i64) -> Result<()> {
        self.event_api.delete_event(event_id).await?;
        info!("Deleted event {}", event_id);
        Ok(())
    }
}
