//! Checkout Data

use std::num::NonZeroU8;

use yori::{checkout::PlaceOrderDetails, orders::code::DEFAULT_PREFIX};

use crate::domain::orders::data::IdempotencyKey;

/// Order code attempts made before a checkout gives up.
pub const DEFAULT_ORDER_CODE_ATTEMPTS: NonZeroU8 = match NonZeroU8::new(5) {
    Some(attempts) => attempts,
    None => NonZeroU8::MIN,
};

/// How checkout issues order codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub order_code_prefix: String,

    /// Codes tried when an insert hits a code that is already taken.
    pub order_code_attempts: NonZeroU8,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            order_code_prefix: DEFAULT_PREFIX.to_string(),
            order_code_attempts: DEFAULT_ORDER_CODE_ATTEMPTS,
        }
    }
}

/// A validated place-order request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    pub details: PlaceOrderDetails,

    /// Repeating a request with the same key returns the original order.
    pub idempotency_key: Option<IdempotencyKey>,
}
