//! Allocation service implementation.

use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::allocations_model::{Allocation, AllocationCreateData};
use super::allocations_traits::AllocationApiTrait;
use crate::errors::Result;
use crate::utils::validation::require_non_negative;

/// Validates allocation edits before they reach the backend.
pub struct AllocationService {
    allocation_api: Arc<dyn AllocationApiTrait>,
}

impl AllocationService {
    pub fn new(allocation_api: Arc<dyn AllocationApiTrait>) -> Self {
        Self { allocation_api }
    }

    pub async fn list_for_version(&self, version_id: i64) -> Result<Vec<Allocation>> {
        self.allocation_api
            .list_allocations_for_version(version_id)
            .await
    }

    pub async fn get(&self, allocation_id: i64) -> Result<Allocation> {
        self.allocation_api.get_allocation(allocation_id).await
    }

    pub async fn create(&self, data: AllocationCreateData) -> Result<Allocation> {
        data.validate()?;
        let created = self.allocation_api.create_allocation(&data).await?;
        info!(
            "Created allocation {} '{}' in version {}",
            created.id, created.name, created.simulation_version_id
        );
        Ok(created)
    }

    pub async fn update(&self, allocation_id: i64, data: AllocationCreateData) -> Result<Allocation> {
        data.validate()?;
        self.allocation_api
            .update_allocation(allocation_id, &data)
            .await
    }

    /// Records a new value, keeping every other field as stored.
    pub async fn update_value(&self, allocation_id: i64, value: Decimal) -> Result<Allocation> {
        require_non_negative("value", value)?;
        let current = self.allocation_api.get_allocation(allocation_id).await?;
        debug!(
            "Updating allocation {} value from {} to {}",
            allocation_id, current.value, value
        );

        let mut data = AllocationCreateData::from(&current);
        data.value = value;
        self.update(allocation_id, data).await
    }

    pub async fn delete(&self, allocation_id: i64) -> Result<()> {
        self.allocation_api.delete_allocation(allocation_id).await?;
        info!("Deleted allocation {}", allocation_id);
        Ok(())
    }
}
