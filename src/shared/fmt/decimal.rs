//! Decimal formatting utilities for human-readable display.
//!
//! Two renderings of the same quantity: `compact` abbreviates with K/M/B/T
//! suffixes (supplies, market caps), `extended` keeps the full magnitude with
//! thousands separators and magnitude-aware precision (prices).

use rust_decimal::prelude::*;
use std::sync::OnceLock;

static TRILLION: OnceLock<Decimal> = OnceLock::new();
static BILLION: OnceLock<Decimal> = OnceLock::new();
static MILLION: OnceLock<Decimal> = OnceLock::new();
static THOUSAND: OnceLock<Decimal> = OnceLock::new();

fn get_trillion() -> &'static Decimal {
    TRILLION.get_or_init(|| Decimal::from_str("1000000000000").unwrap())
}

fn get_billion() -> &'static Decimal {
    BILLION.get_or_init(|| Decimal::from_str("1000000000").unwrap())
}

fn get_million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from_str("1000000").unwrap())
}

fn get_thousand() -> &'static Decimal {
    THOUSAND.get_or_init(|| Decimal::from_str("1000").unwrap())
}

#[inline]
fn count_digits_u128(n: u128) -> u32 {
    if n == 0 {
        return 1;
    }
    n.ilog10() + 1
}

/// Decimal places for the extended rendering.
///
/// Unit-and-above values get cents precision; sub-unit values deepen with the
/// magnitude so micro-cap prices stay distinguishable, capped at 8 places.
fn extended_places(value: &Decimal) -> u32 {
    if value.is_zero() {
        return 2;
    }

    let abs_value = value.abs();

    if abs_value >= Decimal::ONE {
        return 2;
    }

    let scale = abs_value.scale();
    let mantissa = abs_value.mantissa().unsigned_abs();

    let mantissa_digits = count_digits_u128(mantissa);
    let leading_zeros = scale.saturating_sub(mantissa_digits);

    (leading_zeros + 3).min(8)
}

/// Format a `Decimal` with thousands separators and magnitude-aware precision.
///
/// Trailing zeros are trimmed, so `1.50` renders as `"1.5"` and `1.00` as `"1"`.
pub fn extended(value: &Decimal) -> String {
    let rounded = value.round_dp(extended_places(value));
    super::num::group_digits(rounded.to_string())
}

/// Abbreviate a `Decimal` with K/M/B/T suffixes and two decimal places.
pub fn compact(amount: &Decimal) -> String {
    let sign = if amount < &Decimal::ZERO { "-" } else { "" };
    let abs_amount = amount.abs();

    if abs_amount >= *get_trillion() {
        format!("{}{:.2}T", sign, abs_amount / get_trillion())
    } else if abs_amount >= *get_billion() {
        format!("{}{:.2}B", sign, abs_amount / get_billion())
    } else if abs_amount >= *get_million() {
        format!("{}{:.2}M", sign, abs_amount / get_million())
    } else if abs_amount >= *get_thousand() {
        format!("{}{:.2}K", sign, abs_amount / get_thousand())
    } else {
        format!("{}{:.2}", sign, abs_amount)
    }
}
