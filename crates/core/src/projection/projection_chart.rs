//! Line chart data for the patrimony projection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::projection_model::{ProjectionPoint, ProjectionSeries};

/// A line drawn on the projection chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartLine {
    TotalPatrimony,
    FinancialPatrimony,
    ImmobilizedPatrimony,
    /// Dashed comparison line, only drawn on request.
    TotalWithoutInsurance,
}

impl ChartLine {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartLine::TotalPatrimony => "Patrimônio Total",
            ChartLine::FinancialPatrimony => "Patrimônio Financeiro",
            ChartLine::ImmobilizedPatrimony => "Patrimônio Imobilizado",
            ChartLine::TotalWithoutInsurance => "Total sem Seguros",
        }
    }

    pub fn value_of(&self, point: &ProjectionPoint) -> Decimal {
        match self {
            ChartLine::TotalPatrimony => point.total_patrimony,
            ChartLine::FinancialPatrimony => point.financial_patrimony,
            ChartLine::ImmobilizedPatrimony => point.immobilized_patrimony,
            ChartLine::TotalWithoutInsurance => point.total_without_insurance,
        }
    }
}

/// Everything the chart needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub points: Vec<ProjectionPoint>,
    pub lines: Vec<ChartLine>,
    /// True when the backend had no data and the illustrative sample is shown.
    pub is_sample: bool,
}

/// Picks the series to plot and the lines to draw.
pub fn chart_series(series: &ProjectionSeries, show_comparison: bool) -> ChartData {
    let mut lines = vec![
        ChartLine::TotalPatrimony,
        ChartLine::FinancialPatrimony,
        ChartLine::ImmobilizedPatrimony,
    ];
    if show_comparison {
        lines.push(ChartLine::TotalWithoutInsurance);
    }

    let is_sample = series.is_empty();
    let points = if is_sample {
        sample_projection()
    } else {
        series.points().to_vec()
    };

    ChartData {
        points,
        lines,
        is_sample,
    }
}

/// Illustrative projection drawn when the backend returns nothing.
pub fn sample_projection() -> Vec<ProjectionPoint> {
    [
        (2024, dec!(2679930), dec!(1679930), dec!(1000000), dec!(2479930)),
        (2030, dec!(3200000), dec!(2000000), dec!(1200000), dec!(2900000)),
        (2040, dec!(4500000), dec!(2800000), dec!(1700000), dec!(4100000)),
        (2050, dec!(6000000), dec!(3800000), dec!(2200000), dec!(5500000)),
        (2060, dec!(7500000), dec!(4800000), dec!(2700000), dec!(6900000)),
    ]
    .into_iter()
    .map(
        |(year, total, financial, immobilized, without_insurance)| ProjectionPoint {
            year,
            total_patrimony: total,
            financial_patrimony: financial,
            immobilized_patrimony: immobilized,
            total_without_insurance: without_insurance,
        },
    )
    .collect()
}
