//! Pricing
//!
//! Line totals and the order-level [`CostSummary`].

use std::num::TryFromIntError;

use rusty_money::MoneyError;
use thiserror::Error;

use crate::{
    money::{from_money, to_money},
    quantity::Quantity,
};

/// Discount applied to every order. Promotions are not part of checkout yet.
pub const NO_DISCOUNT: u64 = 0;

/// Errors that can occur while pricing lines or orders.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Money arithmetic failed, e.g. mixed currencies.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// `price * quantity` does not fit in a `u64`.
    #[error("line total overflows for price {price} and quantity {quantity}")]
    LineOverflow {
        /// Unit price of the line.
        price: u64,

        /// Quantity of the line.
        quantity: u32,
    },

    /// An amount does not fit the money representation.
    #[error("amount is out of range")]
    OutOfRange(#[from] TryFromIntError),

    /// A computed amount was negative, e.g. a discount larger than the order.
    #[error("amount is negative: {0}")]
    Negative(i64),
}

/// Total for a single line: `price * quantity`.
///
/// # Errors
///
/// Returns [`PricingError::LineOverflow`] when the product overflows.
pub fn line_total(price: u64, quantity: Quantity) -> Result<u64, PricingError> {
    price
        .checked_mul(u64::from(quantity.get()))
        .ok_or(PricingError::LineOverflow {
            price,
            quantity: quantity.get(),
        })
}

/// Order-level amounts.
///
/// `subtotal` is the sum of line totals and
/// `total = subtotal + shipping_fee - discount_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostSummary {
    /// Sum of line totals.
    pub subtotal: u64,

    /// Shipping fee charged for the order.
    pub shipping_fee: u64,

    /// Discount deducted from the order.
    pub discount_amount: u64,

    /// Amount payable.
    pub total: u64,
}

impl CostSummary {
    /// Compute a summary from line totals, a shipping fee and a discount.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount is out of range or the discount
    /// exceeds the subtotal plus shipping.
    pub fn from_line_totals<I>(
        line_totals: I,
        shipping_fee: u64,
        discount_amount: u64,
    ) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = u64>,
    {
        let subtotal = line_totals
            .into_iter()
            .try_fold(to_money(0)?, |sum, amount| {
                Ok::<_, PricingError>(sum.add(to_money(amount)?)?)
            })?;

        let total = subtotal
            .add(to_money(shipping_fee)?)?
            .sub(to_money(discount_amount)?)?;

        Ok(Self {
            subtotal: from_money(&subtotal)?,
            shipping_fee,
            discount_amount,
            total: from_money(&total)?,
        })
    }
}
