//! Orders

pub mod assembly;
pub mod code;
pub mod status;

use uuid::Uuid;

use crate::{payments::PaymentMethod, quantity::Quantity};

/// Immutable snapshot of a cart line taken when the order is placed.
///
/// Later catalogue changes never affect it; `total == price * quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    /// Product the line was bought from.
    pub product_uuid: Uuid,

    /// Product name at the time of purchase.
    pub name: String,

    /// Product image at the time of purchase.
    pub thumbnail_url: String,

    /// Colour and size, e.g. `Màu: Đen | Size: M`.
    pub variant_text: String,

    /// Unit price at the time of purchase.
    pub price: u64,

    /// Units bought.
    pub quantity: Quantity,

    /// `price * quantity`.
    pub total: u64,
}

/// Where and how an order is delivered and paid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingInfo {
    /// Person receiving the parcel.
    pub receiver_name: String,

    /// Receiver's phone number.
    pub phone: String,

    /// Receiver's email address.
    pub email: String,

    /// Delivery address.
    pub address: String,

    /// Chosen payment method.
    pub payment_method: PaymentMethod,

    /// Delivery estimate shown to the customer.
    pub estimated_delivery: String,
}
