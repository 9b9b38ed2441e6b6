//! Insurance service implementation.

use log::info;
use std::sync::Arc;

use super::insurance_model::{Insurance, InsuranceCreateData};
use super::insurance_traits::InsuranceApiTrait;
use crate::errors::Result;

/// Validates insurance edits before they reach the backend.
pub struct InsuranceService {
    insurance_api: Arc<dyn InsuranceApiTrait>,
}

impl InsuranceService {
    pub fn new(insurance_api: Arc<dyn InsuranceApiTrait>) -> Self {
        Self { insurance_api }
    }

    pub async fn get(&self, insurance_id: i64) -> Result<Insurance> {
        self.insurance_api.get_insurance(insurance_id).await
    }

    pub async fn create(&self, data: InsuranceCreateData) -> Result<Insurance> {
        data.validate()?;
        let created = self.insurance_api.create_insurance(&data).await?;
        info!(
            "Created insurance {} '{}' in version {}",
            created.id, created.name, created.simulation_version_id
        );
        Ok(created)
    }

    pub async fn update(&self, insurance_id: i64, data: InsuranceCreateData) -> Result<Insurance> {
        data.validate()?;
        self.insurance_api
            .update_insurance(insurance_id, &data)
            .await
    }

    pub async fn delete(&self, insurance_id: i64) -> Result<()> {
        self.insurance_api.delete_insurance(insurance_id).await?;
        info!("Deleted insurance {}", insurance_id);
        Ok(())
    }
}
