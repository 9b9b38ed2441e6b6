//! One-shot selection of the simulation and version a dashboard opens with.

use serde::{Deserialize, Serialize};

use super::simulations_model::{Simulation, SimulationVersion};

/// The simulation and version the dashboard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSelection {
    pub simulation_id: Option<i64>,
    pub version_id: Option<i64>,
}

impl DashboardSelection {
    /// Resolves the initial selection once data is available.
    ///
    /// A `preferred` simulation wins when it exists; otherwise the first
    /// simulation is used. The version is the current one, else the first.
    /// `versions` must belong to the chosen simulation.
    pub fn initialize(
        simulations: &[Simulation],
        versions: &[SimulationVersion],
        preferred: Option<i64>,
    ) -> Self {
        Self {
            simulation_id: select_simulation(simulations, preferred).map(|s| s.id),
            version_id: select_version(versions).map(|v| v.id),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.simulation_id.is_some() && self.version_id.is_some()
    }
}

/// Preferred simulation when present, else the first one.
pub fn select_simulation(simulations: &[Simulation], preferred: Option<i64>) -> Option<&Simulation> {
    preferred
        .and_then(|id| simulations.iter().find(|s| s.id == id))
        .or_else(|| simulations.first())
}

/// Current version when one is flagged, else the first one.
pub fn select_version(versions: &[SimulationVersion]) -> Option<&SimulationVersion> {
    versions
        .iter()
        .find(|v| v.is_current)
        .or_else(|| versions.first())
}
