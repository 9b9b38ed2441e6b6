use async_trait::async_trait;

use super::simulations_model::{
    CurrentSituation, LifeStatus, Simulation, SimulationCreateData, SimulationVersion,
    SimulationVersionCreateData,
};
use crate::errors::Result;
use crate::history::RecentSimulation;
use crate::projection::ProjectionPoint;

/// Access to simulations, their versions and the backend projection.
#[async_trait]
pub trait SimulationApiTrait: Send + Sync {
    async fn list_simulations(&self) -> Result<Vec<Simulation>>;

    async fn get_simulation(&self, simulation_id: i64) -> Result<Simulation>;

    async fn create_simulation(&self, data: &SimulationCreateData) -> Result<Simulation>;

    async fn update_simulation(
        &self,
        simulation_id: i64,
        data: &SimulationCreateData,
    ) -> Result<Simulation>;

    /// Simulations with their current and legacy versions, for the history browser.
    async fn list_recent_simulations(&self) -> Result<Vec<RecentSimulation>>;

    async fn list_versions(&self, simulation_id: i64) -> Result<Vec<SimulationVersion>>;

    async fn get_version(&self, version_id: i64) -> Result<SimulationVersion>;

    async fn create_version(&self, data: &SimulationVersionCreateData) -> Result<SimulationVersion>;

    async fn update_version(
        &self,
        version_id: i64,
        data: &SimulationVersionCreateData,
    ) -> Result<SimulationVersion>;

    async fn delete_version(&self, version_id: i64) -> Result<()>;

    /// Yearly projection for a simulation under a life-status assumption.
    ///
    /// An empty vector means the backend has no data; it is not an error.
    async fn get_projection(
        &self,
        simulation_id: i64,
        status: LifeStatus,
    ) -> Result<Vec<ProjectionPoint>>;

    /// Copies a simulation under a new name. Returns the new simulation id.
    async fn duplicate_simulation(&self, simulation_id: i64, name: &str) -> Result<i64>;

    async fn delete_simulation(&self, simulation_id: i64) -> Result<()>;

    /// Creates the "current situation" version of a simulation.
    async fn create_current_situation(&self, simulation_id: i64) -> Result<CurrentSituation>;
}
