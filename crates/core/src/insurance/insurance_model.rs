use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::formatting::{format_currency, format_duration_months};
use crate::utils::validation::{require_date, require_non_negative, require_text};

/// Insurance policy as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub id: i64,
    pub simulation_version_id: i64,
    pub name: String,
    pub start_date: String,
    pub duration_months: u32,
    /// Monthly premium.
    pub premium: Decimal,
    pub insured_value: Decimal,
}

impl Insurance {
    /// Type inferred from the policy name.
    pub fn type_label(&self) -> &'static str {
        let lower = self.name.to_lowercase();
        if lower.contains("vida") {
            "Seguro de Vida"
        } else if lower.contains("invalidez") {
            "Seguro de Invalidez"
        } else if lower.contains("acidente") {
            "Seguro de Acidentes"
        } else {
            "Seguro"
        }
    }

    pub fn annual_premium(&self) -> Decimal {
        self.premium * dec!(12)
    }

    pub fn duration_label(&self) -> String {
        format_duration_months(self.duration_months)
    }

    /// `Prêmio: R$ 500 - Mensal`
    pub fn premium_description(&self) -> String {
        format!("Prêmio: {} - Mensal", format_currency(self.premium, 0))
    }
}

/// Input model for creating or replacing an insurance policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCreateData {
    pub simulation_version_id: i64,
    pub name: String,
    pub start_date: String,
    pub duration_months: u32,
    pub premium: Decimal,
    pub insured_value: Decimal,
}

impl InsuranceCreateData {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_date("startDate", &self.start_date)?;
        if self.duration_months == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "durationMonths must be at least 1".to_string(),
            )));
        }
        require_non_negative("premium", self.premium)?;
        require_non_negative("insuredValue", self.insured_value)
    }
}
