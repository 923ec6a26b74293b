//! Order Data

use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;
use yori::{
    orders::{OrderItem, ShippingInfo, code::OrderCode, status::OrderStatus},
    pagination::{PageRequest, Pagination},
    pricing::CostSummary,
};

use crate::domain::{
    orders::records::{OrderRecord, OrderUuid},
    users::records::UserUuid,
};

/// Longest accepted idempotency key.
pub const MAX_IDEMPOTENCY_KEY_LEN: usize = 255;

/// Client supplied key that makes a checkout submission safe to repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("idempotency key must be 1-{MAX_IDEMPOTENCY_KEY_LEN} visible ASCII characters")]
pub struct InvalidIdempotencyKey;

impl IdempotencyKey {
    /// Validate a key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdempotencyKey`] for empty, overlong or non-printable keys.
    pub fn parse(value: &str) -> Result<Self, InvalidIdempotencyKey> {
        let value = value.trim();

        if value.is_empty()
            || value.len() > MAX_IDEMPOTENCY_KEY_LEN
            || !value.bytes().all(|byte| byte.is_ascii_graphic())
        {
            return Err(InvalidIdempotencyKey);
        }

        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub order_code: OrderCode,
    pub shipping_info: ShippingInfo,
    pub note: Option<String>,
    pub items: Vec<OrderItem>,
    pub cost_summary: CostSummary,
    pub idempotency_key: Option<IdempotencyKey>,
}

/// How an order is addressed in a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLookup {
    Uuid(OrderUuid),
    Code(OrderCode),
}

impl OrderLookup {
    /// A well-formed uuid is looked up as an id, anything else as a code.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Uuid::try_parse(value) {
            Ok(uuid) => Self::Uuid(OrderUuid::from_uuid(uuid)),
            Err(_not_uuid) => Self::Code(OrderCode::new(value)),
        }
    }
}

/// Filters and page for listing a user's orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub page: PageRequest,

    /// Case-insensitive substring of the order code.
    pub keyword: Option<String>,
    pub status: Option<OrderStatus>,

    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,

    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<Timestamp>,
}

impl OrderQuery {
    /// The keyword as a `LIKE` pattern matching it anywhere, with `LIKE`
    /// wildcards in the keyword escaped.
    #[must_use]
    pub fn keyword_pattern(&self) -> Option<String> {
        let keyword = self.keyword.as_deref().map(str::trim)?;

        if keyword.is_empty() {
            return None;
        }

        let mut pattern = String::with_capacity(keyword.len() + 2);
        pattern.push('%');

        for character in keyword.chars() {
            if matches!(character, '%' | '_' | '\\') {
                pattern.push('\\');
            }

            pattern.push(character);
        }

        pattern.push('%');

        Some(pattern)
    }
}

/// One page of orders.
#[derive(Debug, Clone)]
pub struct OrdersPage {
    pub orders: Vec<OrderRecord>,
    pub pagination: Pagination,
}
