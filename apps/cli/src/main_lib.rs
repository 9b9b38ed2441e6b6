use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use patrimony_api_client::{ApiClientConfig, PlanningApiClient};
use patrimony_core::allocations::AllocationService;
use patrimony_core::dashboard::DashboardService;
use patrimony_core::events::EventService;
use patrimony_core::history::HistoryService;
use patrimony_core::insurance::InsuranceService;
use patrimony_core::simulations::SimulationService;

pub fn init_tracing() {
    let log_format = std::env::var("PATRIMONY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // `init` also routes `log` records from the library crates into tracing.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

pub struct Services {
    pub dashboard: DashboardService,
    pub history: HistoryService,
    pub simulations: SimulationService,
    pub allocations: AllocationService,
    pub events: EventService,
    pub insurances: InsuranceService,
}

pub fn build_services() -> anyhow::Result<Services> {
    let api_config = ApiClientConfig::from_env()?;
    tracing::info!("Planning API: {}", api_config.base_url);
    let client = Arc::new(PlanningApiClient::new(&api_config)?);

    Ok(Services {
        dashboard: DashboardService::new(
            client.clone(),
            client.clone(),
            client.clone(),
            client.clone(),
        ),
        history: HistoryService::new(client.clone()),
        simulations: SimulationService::new(client.clone()),
        allocations: AllocationService::new(client.clone()),
        events: EventService::new(client.clone()),
        insurances: InsuranceService::new(client),
    })
}
