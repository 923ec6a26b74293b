//! Cart Data

use yori::{quantity::Quantity, variants::Variant};

use crate::domain::{carts::records::CartItemUuid, products::records::ProductUuid};

/// New Cart Item Data
///
/// `uuid` is only used when the line does not exist yet; adding to an
/// existing product, colour and size combination keeps that line's uuid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub buy_count: Quantity,
    pub variant: Variant,
}
