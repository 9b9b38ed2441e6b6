//! History service implementation.

use log::{debug, info};
use std::sync::Arc;

use super::history_model::HistoryEntry;
use crate::errors::{Error, Result, ValidationError};
use crate::projection::ProjectionSeries;
use crate::simulations::{LifeStatus, SimulationApiTrait};

/// Service behind the simulation-history browser.
pub struct HistoryService {
    simulation_api: Arc<dyn SimulationApiTrait>,
}

impl HistoryService {
    pub fn new(simulation_api: Arc<dyn SimulationApiTrait>) -> Self {
        Self { simulation_api }
    }

    /// Recent simulations flattened into browser rows.
    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>> {
        let recent = self.simulation_api.list_recent_simulations().await?;
        debug!("Loaded {} simulations for history", recent.len());
        Ok(recent.iter().map(HistoryEntry::from_recent).collect())
    }

    /// Duplicates `simulation_id` under `name`. Returns the new simulation id.
    pub async fn duplicate(&self, simulation_id: i64, name: &str) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }

        let new_id = self
            .simulation_api
            .duplicate_simulation(simulation_id, name)
            .await?;
        info!(
            "Duplicated simulation {} as '{}' (id {})",
            simulation_id, name, new_id
        );
        Ok(new_id)
    }

    pub async fn delete(&self, simulation_id: i64) -> Result<()> {
        self.simulation_api.delete_simulation(simulation_id).await?;
        info!("Deleted simulation {}", simulation_id);
        Ok(())
    }

    /// Projection to open in the chart for a history entry.
    pub async fn projection_for(
        &self,
        simulation_id: i64,
        status: LifeStatus,
    ) -> Result<ProjectionSeries> {
        let points = self
            .simulation_api
            .get_projection(simulation_id, status)
            .await?;
        let series = ProjectionSeries::new(points);
        debug!(
            "Projection of simulation {} ({}): {} points, {:?}..{:?}",
            simulation_id,
            status,
            series.len(),
            series.first_year(),
            series.last_year()
        );
        Ok(series)
    }
}
