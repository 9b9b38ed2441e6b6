//! Dashboard view models.

use serde::{Deserialize, Serialize};

use crate::allocations::Allocation;
use crate::events::Event;
use crate::insurance::{Insurance, InsuranceSummary};
use crate::projection::{ChartData, ProjectionSeries};
use crate::simulations::{DashboardSelection, LifeStatus, Simulation, SimulationVersion};
use crate::timeline::{TimelineConfig, TimelineView};

/// What the presentation layer asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    /// Simulation to open; the first one is used when absent or unknown.
    pub preferred_simulation_id: Option<i64>,
    pub life_status: LifeStatus,
    pub timeline: TimelineConfig,
    /// Draws the total-without-insurance comparison line.
    pub show_comparison: bool,
}

/// Everything the projection view renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub selection: DashboardSelection,
    pub life_status: LifeStatus,
    pub simulations: Vec<Simulation>,
    pub versions: Vec<SimulationVersion>,
    pub projection: ProjectionSeries,
    pub chart: ChartData,
    pub timeline: TimelineView,
    pub events: Vec<Event>,
    pub allocations: Vec<Allocation>,
    pub insurances: Vec<Insurance>,
    pub insurance_summary: InsuranceSummary,
}

impl DashboardSnapshot {
    pub fn selected_simulation(&self) -> Option<&Simulation> {
        let id = self.selection.simulation_id?;
        self.simulations.iter().find(|s| s.id == id)
    }

    pub fn selected_version(&self) -> Option<&SimulationVersion> {
        let id = self.selection.version_id?;
        self.versions.iter().find(|v| v.id == id)
    }
}
