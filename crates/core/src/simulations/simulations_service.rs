//! Simulation service implementation.

use log::info;
use std::sync::Arc;

use super::simulations_model::{
    CurrentSituation, Simulation, SimulationCreateData, SimulationVersion,
    SimulationVersionCreateData,
};
use super::simulations_traits::SimulationApiTrait;
use crate::errors::Result;

/// Creates, renames and versions simulations.
///
/// Duplication and deletion live in [`HistoryService`](crate::history::HistoryService),
/// next to the browser that triggers them.
pub struct SimulationService {
    simulation_api: Arc<dyn SimulationApiTrait>,
}

impl SimulationService {
    pub fn new(simulation_api: Arc<dyn SimulationApiTrait>) -> Self {
        Self { simulation_api }
    }

    pub async fn get(&self, simulation_id: i64) -> Result<Simulation> {
        self.simulation_api.get_simulation(simulation_id).await
    }

    pub async fn create(&self, name: &str) -> Result<Simulation> {
        let data = SimulationCreateData::new(name);
        data.validate()?;
        let created = self.simulation_api.create_simulation(&data).await?;
        info!("Created simulation {} '{}'", created.id, created.name);
        Ok(created)
    }

    pub async fn rename(&self, simulation_id: i64, name: &str) -> Result<Simulation> {
        let data = SimulationCreateData::new(name);
        data.validate()?;
        self.simulation_api
            .update_simulation(simulation_id, &data)
            .await
    }

    pub async fn create_current_situation(&self, simulation_id: i64) -> Result<CurrentSituation> {
        let situation = self
            .simulation_api
            .create_current_situation(simulation_id)
            .await?;
        info!("Created current situation for simulation {}", simulation_id);
        Ok(situation)
    }

    pub async fn get_version(&self, version_id: i64) -> Result<SimulationVersion> {
        self.simulation_api.get_version(version_id).await
    }

    pub async fn create_version(
        &self,
        data: SimulationVersionCreateData,
    ) -> Result<SimulationVersion> {
        data.validate()?;
        let created = self.simulation_api.create_version(&data).await?;
        info!(
            "Created version {} of simulation {} ({})",
            created.id, created.simulation_id, created.status
        );
        Ok(created)
    }

    pub async fn update_version(
        &self,
        version_id: i64,
        data: SimulationVersionCreateData,
    ) -> Result<SimulationVersion> {
        data.validate()?;
        self.simulation_api.update_version(version_id, &data).await
    }

    pub async fn delete_version(&self, version_id: i64) -> Result<()> {
        self.simulation_api.delete_version(version_id).await?;
        info!("Deleted version {}", version_id);
        Ok(())
    }
}
