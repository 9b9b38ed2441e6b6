use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::currency::{format_currency, format_number};
use crate::constants::CURRENCY_SYMBOL;

const MILLION: Decimal = dec!(1000000);
const THOUSAND: Decimal = dec!(1000);

/// Values at or above this many thousands render in `K` notation.
const COMPACT_THOUSANDS_FLOOR: Decimal = dec!(100);

/// Renders a patrimony value for a timeline marker.
///
/// - one million and above: `R$ 3,2M` (one decimal)
/// - from 100 thousand: `R$ 250K` (whole thousands)
/// - anything smaller: full currency without cents
///
/// A thousands figure that rounds up to 1000 is shown in millions instead.
pub fn compact_label(value: Decimal) -> String {
    let millions = value / MILLION;
    if millions >= Decimal::ONE {
        return format!("{} {}M", CURRENCY_SYMBOL, format_number(millions, 1));
    }

    let thousands = value / THOUSAND;
    if thousands >= COMPACT_THOUSANDS_FLOOR {
        let whole = thousands.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if whole >= THOUSAND {
            return format!("{} {}M", CURRENCY_SYMBOL, format_number(millions, 1));
        }
        return format!("{} {}K", CURRENCY_SYMBOL, format_number(whole, 0));
    }

    format_currency(value, 0)
}

/// Y axis tick for the projection chart; always in millions.
pub fn axis_tick_label(value: Decimal) -> String {
    format!("{} {}M", CURRENCY_SYMBOL, format_number(value / MILLION, 1))
}

/// Human readable insurance duration: `8 meses`, `1 ano`, `10 anos`, `2a 6m`.
pub fn format_duration_months(months: u32) -> String {
    let years = months / 12;
    let remaining = months % 12;

    if years == 0 {
        return format!("{} meses", months);
    }
    if remaining == 0 {
        let unit = if years == 1 { "ano" } else { "anos" };
        return format!("{} {}", years, unit);
    }
    format!("{}a {}m", years, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_label_millions() {
        assert_eq!(compact_label(dec!(3200000)), "R$ 3,2M");
        assert_eq!(compact_label(dec!(1000000)), "R$ 1,0M");
        assert_eq!(compact_label(dec!(12000000)), "R$ 12,0M");
        assert_eq!(compact_label(dec!(2679930)), "R$ 2,7M");
    }

    #[test]
    fn test_compact_label_thousands() {
        assert_eq!(compact_label(dec!(250000)), "R$ 250K");
        assert_eq!(compact_label(dec!(100000)), "R$ 100K");
        assert_eq!(compact_label(dec!(456700)), "R$ 457K");
        assert_eq!(compact_label(dec!(999499)), "R$ 999K");
    }

    #[test]
    fn test_compact_label_thousands_rounding_to_a_million_switch_unit() {
        assert_eq!(compact_label(dec!(999500)), "R$ 1,0M");
        assert_eq!(compact_label(dec!(999950)), "R$ 1,0M");
        assert_eq!(compact_label(dec!(999999.99)), "R$ 1,0M");
    }

    #[test]
    fn test_compact_label_small_values_use_full_currency() {
        assert_eq!(compact_label(dec!(99999)), "R$ 99.999");
        assert_eq!(compact_label(dec!(0)), "R$ 0");
        assert_eq!(compact_label(dec!(-20000)), "-R$ 20.000");
    }

    #[test]
    fn test_axis_tick_label() {
        assert_eq!(axis_tick_label(dec!(4500000)), "R$ 4,5M");
        assert_eq!(axis_tick_label(dec!(0)), "R$ 0,0M");
    }

    #[test]
    fn test_format_duration_months() {
        assert_eq!(format_duration_months(8), "8 meses");
        assert_eq!(format_duration_months(12), "1 ano");
        assert_eq!(format_duration_months(120), "10 anos");
        assert_eq!(format_duration_months(30), "2a 6m");
        assert_eq!(format_duration_months(0), "0 meses");
    }
}
