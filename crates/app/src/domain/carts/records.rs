//! Cart Records

use jiff::Timestamp;
use yori::{orders::assembly::CheckoutLine, quantity::Quantity, variants::Variant};

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart Record
///
/// A user without a stored cart has an empty one with no timestamps.
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub user_uuid: UserUuid,
    pub items: Vec<CartItemRecord>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl CartRecord {
    /// Cart for a user who has never added anything.
    #[must_use]
    pub fn empty(user_uuid: UserUuid) -> Self {
        Self {
            user_uuid,
            items: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines priced at the products' current prices.
    #[must_use]
    pub fn checkout_lines(&self) -> Vec<CheckoutLine> {
        self.items.iter().map(CartItemRecord::checkout_line).collect()
    }
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
///
/// `product_name`, `product_image`, `price` and `slug` are read from the
/// product when the cart is loaded.
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub buy_count: Quantity,
    pub variant: Variant,
    pub product_name: String,
    pub product_image: String,
    pub price: u64,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItemRecord {
    #[must_use]
    pub fn checkout_line(&self) -> CheckoutLine {
        CheckoutLine {
            product_uuid: self.product_uuid.into_uuid(),
            name: self.product_name.clone(),
            image_url: self.product_image.clone(),
            price: self.price,
            quantity: self.buy_count,
            variant: self.variant.clone(),
        }
    }
}
