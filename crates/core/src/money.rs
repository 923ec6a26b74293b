//! Money
//!
//! Every amount in the storefront is a whole number of Vietnamese dong. Public
//! APIs carry amounts as `u64`; arithmetic goes through [`rusty_money`] so
//! currency mismatches and overflow surface as errors instead of wrapping.

use rusty_money::{
    Money,
    iso::{self, Currency},
};

use crate::pricing::PricingError;

/// Currency every storefront amount is denominated in.
pub const CURRENCY: &Currency = iso::VND;

/// Thousands separator used when displaying dong amounts.
const GROUP_SEPARATOR: char = '.';

/// Suffix used when displaying dong amounts.
const DONG_SIGN: char = 'đ';

/// Wrap a dong amount as [`Money`].
///
/// # Errors
///
/// Returns [`PricingError::OutOfRange`] when the amount does not fit the
/// signed minor-unit representation.
pub fn to_money(amount: u64) -> Result<Money<'static, Currency>, PricingError> {
    let minor = i64::try_from(amount)?;

    Ok(Money::from_minor(minor, CURRENCY))
}

/// Unwrap [`Money`] back into a dong amount.
///
/// # Errors
///
/// Returns [`PricingError::Negative`] when the amount is below zero.
pub fn from_money(money: &Money<'_, Currency>) -> Result<u64, PricingError> {
    let minor = money.to_minor_units();

    u64::try_from(minor).map_err(|_negative| PricingError::Negative(minor))
}

/// Format an amount the way the storefront displays prices, e.g. `250.000đ`.
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            formatted.push(GROUP_SEPARATOR);
        }

        formatted.push(digit);
    }

    formatted.push(DONG_SIGN);

    formatted
}

/// Format an amount subtracted from a total, e.g. `-20.000đ`.
pub fn format_vnd_deduction(amount: u64) -> String {
    format!("-{}", format_vnd(amount))
}
