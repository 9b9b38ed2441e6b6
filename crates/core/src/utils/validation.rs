//! Field checks shared by the `*CreateData::validate` methods.

use rust_decimal::Decimal;

use super::time_utils::parse_calendar_date;
use crate::errors::{Error, Result, ValidationError};

pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(())
}

pub fn require_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} cannot be negative",
            field
        ))));
    }
    Ok(())
}

/// The value must be a readable calendar date.
pub fn require_date(field: &str, value: &str) -> Result<()> {
    require_text(field, value)?;
    parse_calendar_date(value).map_err(|_| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} '{}' is not a valid date",
            field, value
        )))
    })?;
    Ok(())
}
