//! Dashboard service implementation.

use futures::future::try_join3;
use log::{debug, warn};
use std::sync::Arc;

use super::dashboard_model::{DashboardRequest, DashboardSnapshot};
use crate::allocations::AllocationApiTrait;
use crate::errors::Result;
use crate::events::EventApiTrait;
use crate::insurance::{InsuranceApiTrait, InsuranceSummary};
use crate::projection::{chart_series, ProjectionSeries};
use crate::simulations::{
    select_simulation, DashboardSelection, LifeStatus, Simulation, SimulationApiTrait,
    SimulationVersion,
};
use crate::timeline::TimelineProjector;

/// Loads dashboard snapshots from the backend collaborators.
pub struct DashboardService {
    simulation_api: Arc<dyn SimulationApiTrait>,
    event_api: Arc<dyn EventApiTrait>,
    allocation_api: Arc<dyn AllocationApiTrait>,
    insurance_api: Arc<dyn InsuranceApiTrait>,
    projector: TimelineProjector,
}

impl DashboardService {
    pub fn new(
        simulation_api: Arc<dyn SimulationApiTrait>,
        event_api: Arc<dyn EventApiTrait>,
        allocation_api: Arc<dyn AllocationApiTrait>,
        insurance_api: Arc<dyn InsuranceApiTrait>,
    ) -> Self {
        Self {
            simulation_api,
            event_api,
            allocation_api,
            insurance_api,
            projector: TimelineProjector::new(),
        }
    }

    /// Resolves the initial selection and loads it.
    ///
    /// Call once when the dashboard opens; later reloads go through
    /// [`load_selection`](Self::load_selection) so the user's choice is kept.
    pub async fn open(&self, request: &DashboardRequest) -> Result<DashboardSnapshot> {
        let simulations = self.simulation_api.list_simulations().await?;
        let versions = match select_simulation(&simulations, request.preferred_simulation_id) {
            Some(simulation) => self.simulation_api.list_versions(simulation.id).await?,
            None => Vec::new(),
        };

        let selection =
            DashboardSelection::initialize(&simulations, &versions, request.preferred_simulation_id);
        debug!(
            "Initial dashboard selection: simulation {:?}, version {:?}",
            selection.simulation_id, selection.version_id
        );

        self.assemble(selection, request, simulations, versions)
            .await
    }

    /// Loads an explicit selection without re-running initialization.
    pub async fn load_selection(
        &self,
        selection: DashboardSelection,
        request: &DashboardRequest,
    ) -> Result<DashboardSnapshot> {
        let simulations = self.simulation_api.list_simulations().await?;
        let versions = match selection.simulation_id {
            Some(id) => self.simulation_api.list_versions(id).await?,
            None => Vec::new(),
        };

        self.assemble(selection, request, simulations, versions)
            .await
    }

    async fn assemble(
        &self,
        selection: DashboardSelection,
        request: &DashboardRequest,
        simulations: Vec<Simulation>,
        versions: Vec<SimulationVersion>,
    ) -> Result<DashboardSnapshot> {
        let projection = match selection.simulation_id {
            Some(id) => self.fetch_projection(id, request.life_status).await,
            None => ProjectionSeries::default(),
        };

        let (events, allocations, insurances) = match selection.version_id {
            Some(version_id) => {
                try_join3(
                    self.event_api.list_events_for_version(version_id),
                    self.allocation_api.list_allocations_for_version(version_id),
                    self.insurance_api.list_insurances_for_version(version_id),
                )
                .await?
            }
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        let timeline =
            self.projector
                .build(&request.timeline, &projection, &events, request.life_status);
        let chart = chart_series(&projection, request.show_comparison);
        let insurance_summary = InsuranceSummary::from_policies(&insurances);

        Ok(DashboardSnapshot {
            selection,
            life_status: request.life_status,
            simulations,
            versions,
            projection,
            chart,
            timeline,
            events,
            allocations,
            insurances,
            insurance_summary,
        })
    }

    /// Projection for the simulation; failures degrade to "no data".
    async fn fetch_projection(&self, simulation_id: i64, status: LifeStatus) -> ProjectionSeries {
        match self.simulation_api.get_projection(simulation_id, status).await {
            Ok(points) => {
                debug!(
                    "Projection for simulation {} ({}): {} points",
                    simulation_id,
                    status,
                    points.len()
                );
                ProjectionSeries::new(points)
            }
            Err(e) => {
                warn!(
                    "Projection for simulation {} ({}) unavailable, showing fallback: {}",
                    simulation_id, status, e
                );
                ProjectionSeries::default()
            }
        }
    }
}
