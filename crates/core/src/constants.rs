/// First year shown on the timeline when no configuration is given
pub const DEFAULT_TIMELINE_START_YEAR: i32 = 2025;

/// Last year shown on the timeline when no configuration is given
pub const DEFAULT_TIMELINE_END_YEAR: i32 = 2060;

/// Spacing of the regular checkpoint grid, in years
pub const CHECKPOINT_INTERVAL_YEARS: i32 = 5;

/// Currency symbol used for every rendered amount
pub const CURRENCY_SYMBOL: &str = "R$";

/// Decimal precision for interpolated values
pub const DECIMAL_PRECISION: u32 = 6;

/// Placeholder rendered when a date is missing or cannot be parsed
pub const MISSING_DATE_PLACEHOLDER: &str = "--/--/--";
