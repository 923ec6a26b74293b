//! Checkout Records

use yori::{orders::code::OrderCode, payments::PaymentMethodDescriptor, pricing::CostSummary};

use crate::domain::orders::records::OrderUuid;

/// Identifier of the address kept on the user's profile.
pub const DEFAULT_ADDRESS_ID: &str = "default";

/// Details used to prefill the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutInit {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub saved_addresses: Vec<SavedAddress>,
}

/// An address the user can pick instead of typing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAddress {
    pub id: &'static str,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub address: String,
    pub is_default: bool,
}

/// Amounts for the current cart and the payment methods on offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInfo {
    pub cost_summary: CostSummary,
    pub payment_methods: [PaymentMethodDescriptor; 4],
}

/// Result of placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_uuid: OrderUuid,
    pub order_code: OrderCode,

    /// The order was created by an earlier request with the same key.
    pub replayed: bool,
}
