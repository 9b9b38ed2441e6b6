//! Unit tests for event grouping.

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn event(id: i64, event_type: &str, value: Decimal, frequency: EventFrequency, start: &str) -> Event {
    Event {
        id,
        simulation_version_id: 1,
        event_type: event_type.to_string(),
        value,
        frequency,
        start_date: Some(start.to_string()),
        end_date: None,
    }
}

#[test]
fn test_monthly_income_is_grouped_under_start_year() {
    let events = vec![event(1, "entrada", dec!(12000), EventFrequency::Monthly, "2030-03-01")];

    let grouped = group_events_by_year(&events);

    assert_eq!(grouped.len(), 1);
    let in_2030 = &grouped[&2030];
    assert_eq!(in_2030.len(), 1);
    assert_eq!(in_2030[0].category, EventCategory::Income);
    assert_eq!(in_2030[0].amount_description, "R$ 12.000/mês");
    assert_eq!(in_2030[0].label, "Entrada");
}

#[test]
fn test_order_within_year_is_preserved() {
    let events = vec![
        event(1, "custo do filho", dec!(5000), EventFrequency::Monthly, "2035-06-01"),
        event(2, "herança", dec!(200000), EventFrequency::Once, "2030-01-26"),
        event(3, "comissão", dec!(500000), EventFrequency::Yearly, "2035-01-01"),
        event(4, "viagem", dec!(30000), EventFrequency::Once, "2035-12-31"),
    ];

    let grouped = group_events_by_year(&events);

    let labels: Vec<&str> = grouped[&2035].iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Custo do filho", "Comissão", "Viagem"]);
    assert_eq!(grouped[&2030][0].amount_description, "R$ 200.000");
    assert_eq!(grouped[&2035][1].amount_description, "R$ 500.000/ano");
    assert_eq!(grouped[&2035][0].category, EventCategory::Expense);
}

#[test]
fn test_years_are_ascending() {
    let events = vec![
        event(1, "entrada", dec!(1), EventFrequency::Once, "2050-01-01"),
        event(2, "entrada", dec!(1), EventFrequency::Once, "2027-01-01"),
        event(3, "entrada", dec!(1), EventFrequency::Once, "2041-01-01"),
    ];

    let grouped = group_events_by_year(&events);

    let years: Vec<i32> = grouped.keys().copied().collect();
    assert_eq!(years, vec![2027, 2041, 2050]);
}

#[test]
fn test_malformed_dates_are_skipped() {
    let events = vec![
        event(1, "entrada", dec!(1000), EventFrequency::Once, "amanhã"),
        event(2, "saída", dec!(2000), EventFrequency::Once, "2031-02-30"),
        event(3, "aposentadoria", dec!(25000), EventFrequency::Monthly, "2055-05-10"),
    ];

    let grouped = group_events_by_year(&events);

    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[&2055][0].category, EventCategory::Income);
}

#[test]
fn test_new_year_utc_timestamp_stays_in_its_year() {
    let events = vec![event(1, "entrada", dec!(1), EventFrequency::Once, "2030-01-01T00:00:00.000Z")];

    let grouped = group_events_by_year(&events);

    assert!(grouped.contains_key(&2030));
    assert!(!grouped.contains_key(&2029));
}

#[test]
fn test_empty_input() {
    let grouped = group_events_by_year(&[]);
    assert!(grouped.is_empty());
    assert!(event_years(&grouped).is_empty());
}

#[test]
fn test_event_years_lists_every_year_with_events() {
    let events = vec![
        event(1, "entrada", dec!(1), EventFrequency::Once, "2027-01-01"),
        event(2, "entrada", dec!(1), EventFrequency::Once, "2052-01-01"),
        event(3, "saída", dec!(1), EventFrequency::Once, "2052-07-01"),
    ];

    let years = event_years(&group_events_by_year(&events));

    assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![2027, 2052]);
}

#[test]
fn test_event_without_start_date_is_skipped() {
    let mut undated = event(1, "saída", dec!(800), EventFrequency::Monthly, "2030-01-01");
    undated.start_date = None;
    let events = vec![
        undated,
        event(2, "entrada", dec!(12000), EventFrequency::Monthly, "2030-03-01"),
    ];

    let grouped = group_events_by_year(&events);

    assert_eq!(grouped[&2030].len(), 1);
    assert_eq!(grouped[&2030][0].label, "Entrada");
}
