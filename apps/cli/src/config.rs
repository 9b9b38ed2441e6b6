use anyhow::Context;

use patrimony_core::constants::{DEFAULT_TIMELINE_END_YEAR, DEFAULT_TIMELINE_START_YEAR};
use patrimony_core::dashboard::DashboardRequest;
use patrimony_core::simulations::LifeStatus;
use patrimony_core::timeline::TimelineConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub simulation_id: Option<i64>,
    pub life_status: LifeStatus,
    pub timeline: TimelineConfig,
    pub show_comparison: bool,
    pub json_output: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let simulation_id = match lookup("PATRIMONY_SIMULATION_ID") {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid PATRIMONY_SIMULATION_ID '{}'", raw))?,
            ),
            _ => None,
        };
        let life_status = match lookup("PATRIMONY_LIFE_STATUS") {
            Some(raw) => raw.parse::<LifeStatus>()?,
            None => LifeStatus::Alive,
        };
        let start_year = parse_year(&lookup, "PATRIMONY_TIMELINE_START", DEFAULT_TIMELINE_START_YEAR)?;
        let end_year = parse_year(&lookup, "PATRIMONY_TIMELINE_END", DEFAULT_TIMELINE_END_YEAR)?;
        let timeline = TimelineConfig::new(start_year, end_year)?;

        Ok(Self {
            simulation_id,
            life_status,
            timeline,
            show_comparison: parse_flag(lookup("PATRIMONY_SHOW_COMPARISON")),
            json_output: lookup("PATRIMONY_OUTPUT")
                .map(|v| v.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    pub fn dashboard_request(&self) -> DashboardRequest {
        DashboardRequest {
            preferred_simulation_id: self.simulation_id,
            life_status: self.life_status,
            timeline: self.timeline,
            show_comparison: self.show_comparison,
        }
    }
}

fn parse_year<F>(lookup: &F, key: &str, default: i32) -> anyhow::Result<i32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .with_context(|| format!("Invalid {} '{}'", key, raw)),
        None => Ok(default),
    }
}

fn parse_flag(raw: Option<String>) -> bool {
    matches!(
        raw.as_deref().map(str::trim).map(str::to_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
