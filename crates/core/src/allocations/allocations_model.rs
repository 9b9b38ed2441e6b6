//! Allocation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::validation::{require_date, require_non_negative, require_text};

/// Kind of tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationKind {
    #[serde(rename = "financeira")]
    Financial,
    #[serde(rename = "imobilizada")]
    Immobilized,
}

impl AllocationKind {
    pub fn badge_label(&self) -> &'static str {
        match self {
            AllocationKind::Financial => "Financeira Mensal",
            AllocationKind::Immobilized => "Imobilizada",
        }
    }
}

/// A recorded value of an allocation at a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationHistory {
    pub id: i64,
    pub allocation_id: i64,
    pub value: Decimal,
    pub date: String,
}

/// Manually tracked asset, optionally financed.
///
/// The financing schedule itself is amortized by the backend; only its
/// inputs are carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: i64,
    pub simulation_version_id: i64,
    #[serde(rename = "type")]
    pub kind: AllocationKind,
    pub name: String,
    pub value: Decimal,
    pub date: String,
    #[serde(default)]
    pub has_financing: Option<bool>,
    #[serde(default)]
    pub financing_start_date: Option<String>,
    #[serde(default)]
    pub financing_installments: Option<u32>,
    #[serde(default)]
    pub financing_rate: Option<Decimal>,
    #[serde(default)]
    pub financing_entry_value: Option<Decimal>,
    #[serde(default)]
    pub history: Option<Vec<AllocationHistory>>,
}

impl Allocation {
    pub fn is_financed(&self) -> bool {
        self.has_financing.unwrap_or(false)
    }

    /// Badges shown next to the allocation name.
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = vec![self.kind.badge_label()];
        if self.is_financed() {
            badges.push("Financiado");
        }
        badges
    }

    /// Most recent recorded value, falling back to the allocation value.
    pub fn latest_value(&self) -> Decimal {
        self.history
            .as_deref()
            .and_then(|history| history.iter().max_by(|a, b| a.date.cmp(&b.date)))
            .map(|entry| entry.value)
            .unwrap_or(self.value)
    }
}

/// Input model for creating or replacing an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCreateData {
    pub simulation_version_id: i64,
    #[serde(rename = "type")]
    pub kind: AllocationKind,
    pub name: String,
    pub value: Decimal,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_financing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_entry_value: Option<Decimal>,
}

impl AllocationCreateData {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_non_negative("value", self.value)?;
        require_date("date", &self.date)?;

        if self.has_financing.unwrap_or(false) {
            match self.financing_start_date.as_deref() {
                Some(start) => require_date("financingStartDate", start)?,
                None => {
                    return Err(Error::Validation(ValidationError::MissingField(
                        "financingStartDate".to_string(),
                    )))
                }
            }
            if self.financing_installments.unwrap_or(0) == 0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "A financed allocation needs at least one installment".to_string(),
                )));
            }
        }
        if let Some(rate) = self.financing_rate {
            require_non_negative("financingRate", rate)?;
        }
        if let Some(entry) = self.financing_entry_value {
            require_non_negative("financingEntryValue", entry)?;
            if entry > self.value {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "financingEntryValue cannot exceed the allocation value".to_string(),
                )));
            }
        }
        Ok(())
    }
}

impl From<&Allocation> for AllocationCreateData {
    fn from(allocation: &Allocation) -> Self {
        Self {
            simulation_version_id: allocation.simulation_version_id,
            kind: allocation.kind,
            name: allocation.name.clone(),
            value: allocation.value,
            date: allocation.date.clone(),
            has_financing: allocation.has_financing,
            financing_start_date: allocation.financing_start_date.clone(),
            financing_installments: allocation.financing_installments,
            financing_rate: allocation.financing_rate,
            financing_entry_value: allocation.financing_entry_value,
        }
    }
}
