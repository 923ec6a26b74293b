//! Quantities

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
};

use thiserror::Error;

/// Largest quantity a single line may hold. Matches the storage column width.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Errors produced when validating a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Zero or negative.
    #[error("quantity must be at least 1")]
    NotPositive,

    /// Has a fractional part, or is not a finite number.
    #[error("quantity must be a whole number")]
    NotWhole,

    /// Exceeds [`MAX_QUANTITY`].
    #[error("quantity must not exceed {MAX_QUANTITY}")]
    TooLarge,
}

/// Number of units on a cart or order line. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Validate a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError`] when the value is zero or above [`MAX_QUANTITY`].
    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value > MAX_QUANTITY {
            return Err(QuantityError::TooLarge);
        }

        NonZeroU32::new(value)
            .map(Self)
            .ok_or(QuantityError::NotPositive)
    }

    /// Validate a quantity received as a JSON number, which may carry a
    /// fractional part or a sign.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError`] unless the number is a whole number between
    /// one and [`MAX_QUANTITY`].
    pub fn from_number(value: f64) -> Result<Self, QuantityError> {
        if !value.is_finite() || value.fract().abs() > 0.0 {
            return Err(QuantityError::NotWhole);
        }

        if value < 1.0 {
            return Err(QuantityError::NotPositive);
        }

        if value > f64::from(MAX_QUANTITY) {
            return Err(QuantityError::TooLarge);
        }

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is whole and within 1..=MAX_QUANTITY"
        )]
        let whole = value as u32;

        Self::new(whole)
    }

    /// The quantity as a plain integer.
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value = u32::try_from(value).map_err(|_negative| QuantityError::NotPositive)?;

        Self::new(value)
    }
}

impl From<Quantity> for i32 {
    fn from(value: Quantity) -> Self {
        // MAX_QUANTITY is i32::MAX, so the conversion cannot fail.
        i32::try_from(value.get()).unwrap_or(i32::MAX)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
