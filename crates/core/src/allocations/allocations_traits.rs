use async_trait::async_trait;

use super::allocations_model::{Allocation, AllocationCreateData};
use crate::errors::Result;

/// Access to the allocations of a simulation version.
#[async_trait]
pub trait AllocationApiTrait: Send + Sync {
    async fn list_allocations_for_version(&self, version_id: i64) -> Result<Vec<Allocation>>;

    async fn get_allocation(&self, allocation_id: i64) -> Result<Allocation>;

    async fn create_allocation(&self, data: &AllocationCreateData) -> Result<Allocation>;

    /// Replaces the stored allocation with `data`.
    async fn update_allocation(
        &self,
        allocation_id: i64,
        data: &AllocationCreateData,
    ) -> Result<Allocation>;

    async fn delete_allocation(&self, allocation_id: i64) -> Result<()>;
}
