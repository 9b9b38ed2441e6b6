//! History domain models.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::simulations::LifeStatus;
use crate::utils::time_utils::format_short_date;

/// Simulation with its version history, as returned by the recent feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSimulation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub versions: Vec<HistoryVersion>,
    #[serde(default)]
    pub legacy_versions: Vec<HistoryVersion>,
}

/// Version entry in the history feed.
///
/// The feed may contain empty objects; every field is therefore optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryVersion {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub is_current: Option<bool>,
    /// Unrecognized statuses are read as absent.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<LifeStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HistoryVersion {
    pub fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.start_date.is_none()
            && self.is_current.is_none()
            && self.status.is_none()
            && self.created_at.is_none()
    }
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<LifeStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => match text.parse::<LifeStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                warn!("Ignoring unknown version status '{}'", text);
                None
            }
        },
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            warn!("Ignoring non-text version status {}", other);
            None
        }
    })
}

/// One version line in the history browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub version_id: Option<i64>,
    pub label: String,
    pub is_legacy: bool,
}

impl HistoryRow {
    /// `Versão 4 - 01/01/25`. Versions without an id are numbered by
    /// position, legacy ones with an `L` prefix.
    pub fn from_version(version: &HistoryVersion, index: usize, is_legacy: bool) -> Self {
        let number = match (version.id, is_legacy) {
            (Some(id), _) => id.to_string(),
            (None, false) => (index + 1).to_string(),
            (None, true) => format!("L{}", index + 1),
        };
        Self {
            version_id: version.id,
            label: format!(
                "Versão {} - {}",
                number,
                format_short_date(version.start_date.as_deref())
            ),
            is_legacy,
        }
    }
}

/// A simulation in the history browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub simulation_id: i64,
    pub name: String,
    pub has_legacy_versions: bool,
    pub rows: Vec<HistoryRow>,
}

impl HistoryEntry {
    /// Current versions first, then legacy ones. Blank feed entries are dropped.
    pub fn from_recent(simulation: &RecentSimulation) -> Self {
        let current = simulation
            .versions
            .iter()
            .filter(|v| !v.is_blank())
            .enumerate()
            .map(|(index, v)| HistoryRow::from_version(v, index, false));
        let legacy = simulation
            .legacy_versions
            .iter()
            .filter(|v| !v.is_blank())
            .enumerate()
            .map(|(index, v)| HistoryRow::from_version(v, index, true));

        let rows: Vec<HistoryRow> = current.chain(legacy).collect();

        Self {
            simulation_id: simulation.id,
            name: simulation.name.clone(),
            has_legacy_versions: rows.iter().any(|row| row.is_legacy),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_does_not_fail_the_feed() {
        let feed: Vec<RecentSimulation> = serde_json::from_str(
            r#"[{
                "id": 1,
                "name": "Plano A",
                "versions": [
                    {"id": 1, "status": "Vivo"},
                    {"id": 2, "status": "Aposentado"},
                    {"id": 3, "status": null},
                    {"id": 4, "status": 7},
                    {"id": 5}
                ]
            }]"#,
        )
        .unwrap();

        let statuses: Vec<Option<LifeStatus>> =
            feed[0].versions.iter().map(|v| v.status).collect();
        assert_eq!(
            statuses,
            vec![Some(LifeStatus::Alive), None, None, None, None]
        );
    }

    #[test]
    fn test_status_accepts_wire_and_english_names() {
        let version: HistoryVersion =
            serde_json::from_str(r#"{"status":"Inválido"}"#).unwrap();
        assert_eq!(version.status, Some(LifeStatus::Disabled));
        let version: HistoryVersion = serde_json::from_str(r#"{"status":"Deceased"}"#).unwrap();
        assert_eq!(version.status, Some(LifeStatus::Deceased));
    }
}
