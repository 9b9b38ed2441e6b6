//! Display formatting for amounts, compact labels and durations.
//!
//! Everything here renders in the pt-BR convention used by the dashboard:
//! `.` groups thousands, `,` separates decimals and amounts carry the `R$` symbol.

mod currency;
mod labels;

pub use currency::{format_currency, format_number};
pub use labels::{axis_tick_label, compact_label, format_duration_months};
