//! Simulation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::allocations::Allocation;
use crate::errors::{Error, Result};
use crate::events::Event;
use crate::insurance::Insurance;
use crate::utils::validation::{require_date, require_text};

/// Life-status assumption the backend projects under.
///
/// How each status adjusts cash flows is decided by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStatus {
    #[default]
    #[serde(rename = "Vivo", alias = "Alive")]
    Alive,
    #[serde(rename = "Morto", alias = "Deceased")]
    Deceased,
    #[serde(rename = "Inválido", alias = "Invalido", alias = "Disabled")]
    Disabled,
}

impl LifeStatus {
    /// Value sent to and received from the backend.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            LifeStatus::Alive => "Vivo",
            LifeStatus::Deceased => "Morto",
            LifeStatus::Disabled => "Inválido",
        }
    }
}

impl fmt::Display for LifeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for LifeStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vivo" | "alive" => Ok(LifeStatus::Alive),
            "morto" | "deceased" => Ok(LifeStatus::Deceased),
            "inválido" | "invalido" | "disabled" => Ok(LifeStatus::Disabled),
            other => Err(Error::InvalidConfigValue(format!(
                "Unknown life status '{}'",
                other
            ))),
        }
    }
}

/// A named financial plan belonging to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub versions: Vec<SimulationVersion>,
}

/// Snapshot of a simulation's inputs. One version per simulation is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationVersion {
    pub id: i64,
    pub simulation_id: i64,
    #[serde(default)]
    pub status: LifeStatus,
    pub start_date: String,
    /// Real interest rate, in percent per year.
    pub real_rate: Decimal,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocations: Option<Vec<Allocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurances: Option<Vec<Insurance>>,
}

impl SimulationVersion {
    /// Label used by the version picker.
    pub fn picker_label(&self) -> String {
        version_label(self.id, self.is_current)
    }
}

/// `"Atual"` for the current version, `"V<id>"` otherwise.
pub fn version_label(id: i64, is_current: bool) -> String {
    if is_current {
        "Atual".to_string()
    } else {
        format!("V{}", id)
    }
}

/// Answer of the "create current situation" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSituation {
    pub simulation_id: i64,
    pub is_current: bool,
}

/// Input model for creating or renaming a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationCreateData {
    pub name: String,
}

impl SimulationCreateData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

/// Input model for creating or replacing a simulation version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationVersionCreateData {
    pub simulation_id: i64,
    pub status: LifeStatus,
    pub start_date: String,
    /// Real interest rate, in percent per year.
    pub real_rate: Decimal,
}

impl SimulationVersionCreateData {
    pub fn validate(&self) -> Result<()> {
        require_date("startDate", &self.start_date)
    }
}
