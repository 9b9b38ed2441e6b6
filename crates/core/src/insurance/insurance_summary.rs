use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::insurance_model::Insurance;

/// Totals shown under the insurance list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceSummary {
    pub policy_count: usize,
    pub total_monthly_premium: Decimal,
    pub total_insured_value: Decimal,
    pub total_annual_premium: Decimal,
}

impl InsuranceSummary {
    pub fn from_policies(policies: &[Insurance]) -> Self {
        policies.iter().fold(Self::default(), |mut acc, policy| {
            acc.policy_count += 1;
            acc.total_monthly_premium += policy.premium;
            acc.total_insured_value += policy.insured_value;
            acc.total_annual_premium += policy.annual_premium();
            acc
        })
    }
}
