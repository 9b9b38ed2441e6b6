//! Plain-text rendering of dashboard snapshots and history entries.

use patrimony_core::dashboard::DashboardSnapshot;
use patrimony_core::events::EventCategory;
use patrimony_core::formatting::{axis_tick_label, format_currency};
use patrimony_core::history::HistoryEntry;
use patrimony_core::projection::ChartData;
use patrimony_core::timeline::TimelineView;

pub fn dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    let simulation = snapshot
        .selected_simulation()
        .map(|s| s.name.as_str())
        .unwrap_or("Nenhuma simulação");
    let version = snapshot
        .selected_version()
        .map(|v| v.picker_label())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!(
        "{} ({}) - {}\n\n",
        simulation, version, snapshot.life_status
    ));

    out.push_str(&chart(&snapshot.chart));
    out.push('\n');
    out.push_str(&timeline(&snapshot.timeline));

    if !snapshot.allocations.is_empty() {
        out.push_str("\nAlocações\n");
        for allocation in &snapshot.allocations {
            out.push_str(&format!(
                "  {:<30} {:>18}  [{}]\n",
                allocation.name,
                format_currency(allocation.latest_value(), 0),
                allocation.badges().join(", ")
            ));
        }
    }

    if !snapshot.insurances.is_empty() {
        out.push_str("\nSeguros\n");
        for insurance in &snapshot.insurances {
            out.push_str(&format!(
                "  {:<30} {:<20} {:<10} {}\n",
                insurance.name,
                insurance.type_label(),
                insurance.duration_label(),
                insurance.premium_description()
            ));
        }
        let summary = &snapshot.insurance_summary;
        out.push_str(&format!(
            "  Total: {} apólice(s), prêmio anual {}, cobertura {}\n",
            summary.policy_count,
            format_currency(summary.total_annual_premium, 0),
            format_currency(summary.total_insured_value, 0)
        ));
    }

    out
}

pub fn chart(chart: &ChartData) -> String {
    let mut out = String::new();

    if chart.is_sample {
        out.push_str("Projeção patrimonial (exemplo, sem dados do servidor)\n");
    } else {
        out.push_str("Projeção patrimonial\n");
    }

    out.push_str(&format!("  {:<6}", "Ano"));
    for line in &chart.lines {
        out.push_str(&format!(" {:>26}", line.display_name()));
    }
    out.push('\n');

    for point in &chart.points {
        out.push_str(&format!("  {:<6}", point.year));
        for line in &chart.lines {
            out.push_str(&format!(" {:>26}", axis_tick_label(line.value_of(point))));
        }
        out.push('\n');
    }
    out
}

pub fn timeline(view: &TimelineView) -> String {
    let mut out = String::from("Linha do tempo\n");
    for marker in &view.markers {
        let value = marker
            .value
            .as_ref()
            .map(|v| v.label.as_str())
            .unwrap_or("-");
        out.push_str(&format!(
            "  {} {:>5.1}%  {}\n",
            marker.year, marker.position_percent, value
        ));
        for event in &marker.events {
            let sign = match event.category {
                EventCategory::Income => '+',
                EventCategory::Expense => '-',
            };
            out.push_str(&format!(
                "         {} {} {}\n",
                sign, event.label, event.amount_description
            ));
        }
    }
    out
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "Nenhuma simulação encontrada\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("#{} {}\n", entry.simulation_id, entry.name));
        for row in &entry.rows {
            let tag = if row.is_legacy { " (legado)" } else { "" };
            out.push_str(&format!("  {}{}\n", row.label, tag));
        }
    }
    out
}
