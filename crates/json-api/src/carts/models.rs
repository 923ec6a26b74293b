//! Cart request and response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use yori::{
    quantity::{Quantity, QuantityError},
    validation::Violations,
};
use yori_app::domain::carts::records::{CartItemRecord, CartRecord};

use crate::fields::{Numeric, numeric};

pub(crate) const BUY_COUNT_REQUIRED: &str = "Buy count is required";

pub(crate) const BUY_COUNT_POSITIVE: &str = "Buy count must be a positive integer";

const BUY_COUNT_TOO_LARGE: &str = "Buy count is too large";

/// Validate a `buy_count` sent as a JSON number or as numeric text.
pub(crate) fn parse_buy_count(
    violations: &mut Violations,
    buy_count: Option<Value>,
) -> Option<Quantity> {
    let value = match numeric(buy_count) {
        Numeric::Value(value) => value,
        Numeric::Missing => {
            violations.push("buy_count", BUY_COUNT_REQUIRED);
            return None;
        }
        Numeric::Invalid => {
            violations.push("buy_count", BUY_COUNT_POSITIVE);
            return None;
        }
    };

    match Quantity::from_number(value) {
        Ok(quantity) => Some(quantity),
        Err(QuantityError::TooLarge) => {
            violations.push("buy_count", BUY_COUNT_TOO_LARGE);
            None
        }
        Err(QuantityError::NotPositive | QuantityError::NotWhole) => {
            violations.push("buy_count", BUY_COUNT_POSITIVE);
            None
        }
    }
}

/// Buy count body shared by the update endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuyCountRequest {
    /// Positive whole number, as a number or numeric text.
    pub buy_count: Option<Value>,
}

/// A line of the cart with its product's current details.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub item_id: String,
    pub product_id: String,
    pub buy_count: u32,
    pub color: Option<String>,
    pub size: Option<String>,
    pub product_name: String,
    pub product_image: String,

    /// Current unit price in dong.
    pub price: u64,
    pub slug: String,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            item_id: item.uuid.to_string(),
            product_id: item.product_uuid.to_string(),
            buy_count: item.buy_count.get(),
            color: item.variant.color().map(str::to_owned),
            size: item.variant.size().map(str::to_owned),
            product_name: item.product_name,
            product_image: item.product_image,
            price: item.price,
            slug: item.slug,
        }
    }
}

/// The user's cart. Timestamps are absent until the first item is added.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            items: cart.items.into_iter().map(Into::into).collect(),
            created_at: cart.created_at.map(|at| at.to_string()),
            updated_at: cart.updated_at.map(|at| at.to_string()),
        }
    }
}
