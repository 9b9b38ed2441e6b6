use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_SYMBOL;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Formats a number with pt-BR separators and a fixed number of fraction digits.
///
/// Rounds half away from zero, so `2.25` with one digit becomes `"2,3"`.
pub fn format_number(value: Decimal, fraction_digits: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(fraction_digits);

    let text = rounded.to_string();
    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer_part));
    if let Some(frac) = fraction_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

/// Formats an amount as BRL currency, e.g. `R$ 12.000` or `R$ 2.679.930,00`.
///
/// Negative amounts put the sign before the symbol (`-R$ 500`).
pub fn format_currency(value: Decimal, fraction_digits: u32) -> String {
    let number = format_number(value, fraction_digits);
    match number.strip_prefix('-') {
        Some(magnitude) => format!("-{} {}", CURRENCY_SYMBOL, magnitude),
        None => format!("{} {}", CURRENCY_SYMBOL, number),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
