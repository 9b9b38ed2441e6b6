use async_trait::async_trait;

use super::insurance_model::{Insurance, InsuranceCreateData};
use crate::errors::Result;

/// Access to the insurance policies of a simulation version.
#[async_trait]
pub trait InsuranceApiTrait: Send + Sync {
    async fn list_insurances_for_version(&self, version_id: i64) -> Result<Vec<Insurance>>;

    async fn get_insurance(&self, insurance_id: i64) -> Result<Insurance>;

    async fn create_insurance(&self, data: &InsuranceCreateData) -> Result<Insurance>;

    async fn update_insurance(
        &self,
        insurance_id: i64,
        data: &InsuranceCreateData,
    ) -> Result<Insurance>;

    async fn delete_insurance(&self, insurance_id: i64) -> Result<()>;
}
