//! Event domain models.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::formatting::format_currency;
use crate::utils::time_utils::parse_calendar_date;
use crate::utils::validation::{require_date, require_non_negative, require_text};

/// Event types that count as income. Everything else is an expense.
pub const INCOME_EVENT_TYPES: [&str; 4] = ["entrada", "herança", "comissão", "aposentadoria"];

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventFrequency {
    #[serde(rename = "única", alias = "Once", alias = "once", alias = "unica")]
    Once,
    #[serde(rename = "mensal", alias = "Monthly", alias = "monthly")]
    Monthly,
    #[serde(rename = "anual", alias = "Yearly", alias = "yearly")]
    Yearly,
}

impl EventFrequency {
    /// Suffix appended to the amount in descriptions.
    pub fn amount_suffix(&self) -> &'static str {
        match self {
            EventFrequency::Once => "",
            EventFrequency::Monthly => "/mês",
            EventFrequency::Yearly => "/ano",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventFrequency::Once => "Única",
            EventFrequency::Monthly => "Mensal",
            EventFrequency::Yearly => "Anual",
        }
    }
}

/// Direction of a cash-flow event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    Income,
    Expense,
}

impl EventCategory {
    /// Classifies a backend event type. Case and surrounding whitespace are ignored.
    pub fn classify(event_type: &str) -> Self {
        let normalized = event_type.trim().to_lowercase();
        if INCOME_EVENT_TYPES.contains(&normalized.as_str()) {
            EventCategory::Income
        } else {
            EventCategory::Expense
        }
    }
}

/// Cash-flow event as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub simulation_version_id: i64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub value: Decimal,
    pub frequency: EventFrequency,
    /// Raw backend date; parsed when the event is placed on the timeline.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Event {
    pub fn category(&self) -> EventCategory {
        EventCategory::classify(&self.event_type)
    }

    /// Amount with the frequency suffix, e.g. `R$ 12.000/mês`.
    pub fn amount_description(&self) -> String {
        format!(
            "{}{}",
            format_currency(self.value, 0),
            self.frequency.amount_suffix()
        )
    }

    /// Calendar year of the start date.
    pub fn start_year(&self) -> Result<i32> {
        let raw = self.start_date.as_deref().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("startDate".to_string()))
        })?;
        Ok(parse_calendar_date(raw)?.year())
    }
}

/// Input model for creating or replacing an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreateData {
    #[serde(rename = "type")]
    pub event_type: String,
    pub value: Decimal,
    pub frequency: EventFrequency,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl EventCreateData {
    pub fn validate(&self) -> Result<()> {
        require_text("type", &self.event_type)?;
        require_non_negative("value", self.value)?;
        require_date("startDate", &self.start_date)?;

        if let Some(end) = self.end_date.as_deref() {
            require_date("endDate", end)?;
            if parse_calendar_date(end)? < parse_calendar_date(&self.start_date)? {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "endDate cannot be before startDate".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Event normalized for display on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub year: i32,
    pub category: EventCategory,
    pub label: String,
    pub amount_description: String,
}

impl TimelineEvent {
    /// Normalizes a backend event. Fails only when the start date is unreadable.
    pub fn from_event(event: &Event) -> Result<Self> {
        Ok(Self {
            year: event.start_year()?,
            category: event.category(),
            label: display_label(&event.event_type),
            amount_description: event.amount_description(),
        })
    }
}

/// `"custo do filho"` becomes `"Custo do filho"`.
fn display_label(event_type: &str) -> String {
    let trimmed = event_type.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_classify_income_types() {
        for kind in ["entrada", "herança", "comissão", "aposentadoria"] {
            assert_eq!(EventCategory::classify(kind), EventCategory::Income);
        }
        assert_eq!(EventCategory::classify(" Herança "), EventCategory::Income);
        assert_eq!(EventCategory::classify("ENTRADA"), EventCategory::Income);
    }

    #[test]
    fn test_classify_everything_else_as_expense() {
        assert_eq!(EventCategory::classify("saída"), EventCategory::Expense);
        assert_eq!(EventCategory::classify("custo do filho"), EventCategory::Expense);
        assert_eq!(EventCategory::classify(""), EventCategory::Expense);
    }

    #[test]
    fn test_frequency_wire_names_and_aliases() {
        let parsed: EventFrequency = serde_json::from_str("\"mensal\"").unwrap();
        assert_eq!(parsed, EventFrequency::Monthly);
        let parsed: EventFrequency = serde_json::from_str("\"Yearly\"").unwrap();
        assert_eq!(parsed, EventFrequency::Yearly);
        let parsed: EventFrequency = serde_json::from_str("\"única\"").unwrap();
        assert_eq!(parsed, EventFrequency::Once);
        assert_eq!(serde_json::to_string(&EventFrequency::Once).unwrap(), "\"única\"");
    }

    #[test]
    fn test_event_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "simulationVersionId": 3,
            "type": "herança",
            "value": 200000,
            "frequency": "única",
            "startDate": "2023-01-26"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.simulation_version_id, 3);
        assert_eq!(event.value, dec!(200000));
        assert_eq!(event.end_date, None);
        assert_eq!(event.category(), EventCategory::Income);
    }

    #[test]
    fn test_amount_description_by_frequency() {
        let mut event = Event {
            id: 1,
            simulation_version_id: 1,
            event_type: "entrada".to_string(),
            value: dec!(12000),
            frequency: EventFrequency::Monthly,
            start_date: Some("2030-03-01".to_string()),
            end_date: None,
        };
        assert_eq!(event.amount_description(), "R$ 12.000/mês");

        event.frequency = EventFrequency::Yearly;
        assert_eq!(event.amount_description(), "R$ 12.000/ano");

        event.frequency = EventFrequency::Once;
        assert_eq!(event.amount_description(), "R$ 12.000");
    }

    #[test]
    fn test_missing_start_date_decodes_but_has_no_year() {
        let json = r#"{"id":2,"type":"saída","value":100,"frequency":"única","startDate":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.start_date, None);
        assert!(matches!(
            event.start_year(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_create_data_validation() {
        let data = EventCreateData {
            event_type: "custo do filho".to_string(),
            value: dec!(3000),
            frequency: EventFrequency::Monthly,
            start_date: "2030-01-01".to_string(),
            end_date: Some("2048-12-31".to_string()),
        };
        assert!(data.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&data).unwrap()["frequency"],
            "mensal"
        );

        let reversed = EventCreateData {
            end_date: Some("2029-12-31".to_string()),
            ..data.clone()
        };
        assert!(reversed.validate().is_err());

        let untyped = EventCreateData {
            event_type: String::new(),
            ..data
        };
        assert!(untyped.validate().is_err());
    }

    #[test]
    fn test_display_label_capitalizes_first_letter() {
        assert_eq!(display_label("custo do filho"), "Custo do filho");
        assert_eq!(display_label("ênfase"), "Ênfase");
        assert_eq!(display_label("  "), "");
    }
}
