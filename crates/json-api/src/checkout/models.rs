//! Checkout request and response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use yori::{
    checkout::RawPlaceOrder,
    payments::PaymentMethodDescriptor,
    shipping::{RawShippingAddress, ShippingMethod, ShippingQuote},
    validation::Violations,
};
use yori_app::domain::checkout::records::{CheckoutInit, PaymentInfo, SavedAddress};

use crate::{
    fields::{flag, text},
    presenters::money::CostSummaryView,
};

const EMAIL_MESSAGE: &str = "Valid email is required";

/// Contact details shown at the top of the checkout form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutUserResponse {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SavedAddressResponse {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub full_address: String,
    pub is_default: bool,
}

impl From<SavedAddress> for SavedAddressResponse {
    fn from(address: SavedAddress) -> Self {
        Self {
            id: address.id.to_owned(),
            full_name: address.full_name,
            phone: address.phone,
            email: address.email,
            full_address: address.address,
            is_default: address.is_default,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutInitResponse {
    pub user: CheckoutUserResponse,
    pub saved_addresses: Vec<SavedAddressResponse>,
}

impl From<CheckoutInit> for CheckoutInitResponse {
    fn from(init: CheckoutInit) -> Self {
        Self {
            user: CheckoutUserResponse {
                name: init.full_name,
                email: init.email,
                phone: init.phone,
            },
            saved_addresses: init.saved_addresses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Shipping address to validate. Every field is a required string.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidateShippingRequest {
    pub full_name: Option<Value>,
    pub phone: Option<Value>,
    pub email: Option<Value>,
    pub province_id: Option<Value>,
    pub district_id: Option<Value>,
    pub ward_id: Option<Value>,
    pub address: Option<Value>,
}

impl ValidateShippingRequest {
    /// Read every field as text, reporting those of another JSON type.
    pub(crate) fn into_raw(self) -> Result<RawShippingAddress, Violations> {
        let mut violations = Violations::new();

        let raw = RawShippingAddress {
            full_name: text(
                &mut violations,
                "full_name",
                self.full_name,
                "Full name must be a string",
            ),
            phone: text(&mut violations, "phone", self.phone, "Phone must be a string"),
            email: text(&mut violations, "email", self.email, EMAIL_MESSAGE),
            province_id: text(
                &mut violations,
                "province_id",
                self.province_id,
                "Province ID must be a string",
            ),
            district_id: text(
                &mut violations,
                "district_id",
                self.district_id,
                "District ID must be a string",
            ),
            ward_id: text(&mut violations, "ward_id", self.ward_id, "Ward ID must be a string"),
            address: text(&mut violations, "address", self.address, "Address must be a string"),
        };

        violations.into_result(|| Some(raw))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingMethodResponse {
    pub id: String,
    pub name: String,
    pub fee: u64,
    pub estimated_delivery: String,
}

impl From<ShippingMethod> for ShippingMethodResponse {
    fn from(method: ShippingMethod) -> Self {
        Self {
            id: method.id.to_owned(),
            name: method.name.to_owned(),
            fee: method.fee,
            estimated_delivery: method.estimated_delivery.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingQuoteResponse {
    pub shipping_fee: u64,
    pub shipping_methods: Vec<ShippingMethodResponse>,
}

impl From<ShippingQuote> for ShippingQuoteResponse {
    fn from(quote: ShippingQuote) -> Self {
        Self {
            shipping_fee: quote.fee,
            shipping_methods: quote.methods.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentMethodResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_enabled: bool,
}

impl From<PaymentMethodDescriptor> for PaymentMethodResponse {
    fn from(descriptor: PaymentMethodDescriptor) -> Self {
        Self {
            id: descriptor.method.as_str().to_owned(),
            name: descriptor.name.to_owned(),
            description: descriptor.description.to_owned(),
            is_enabled: descriptor.is_enabled,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentInfoResponse {
    pub summary: CostSummaryView,
    pub payment_methods: Vec<PaymentMethodResponse>,
}

impl From<PaymentInfo> for PaymentInfoResponse {
    fn from(info: PaymentInfo) -> Self {
        Self {
            summary: info.cost_summary.into(),
            payment_methods: info.payment_methods.into_iter().map(Into::into).collect(),
        }
    }
}

/// Place Order Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlaceOrderRequest {
    /// One of `cod`, `bank_transfer`, `credit_card` or `e_wallet`.
    pub payment_method: Option<Value>,

    /// Full delivery address as one line.
    pub shipping_address: Option<Value>,
    pub receiver_name: Option<Value>,
    pub phone: Option<Value>,
    pub email: Option<Value>,
    pub note: Option<Value>,

    /// Boolean, defaults to `true`.
    pub billing_address_same_as_shipping: Option<Value>,
}

impl PlaceOrderRequest {
    /// Read every field with its expected JSON type, reporting the rest.
    pub(crate) fn into_raw(self) -> Result<RawPlaceOrder, Violations> {
        let mut violations = Violations::new();

        let raw = RawPlaceOrder {
            payment_method: text(
                &mut violations,
                "payment_method",
                self.payment_method,
                "Payment method must be a string",
            ),
            shipping_address: text(
                &mut violations,
                "shipping_address",
                self.shipping_address,
                "Shipping address must be a string",
            ),
            receiver_name: text(
                &mut violations,
                "receiver_name",
                self.receiver_name,
                "Receiver name must be a string",
            ),
            phone: text(&mut violations, "phone", self.phone, "Phone must be a string"),
            email: text(&mut violations, "email", self.email, EMAIL_MESSAGE),
            note: text(&mut violations, "note", self.note, "Note must be a string"),
            billing_address_same_as_shipping: flag(
                &mut violations,
                "billing_address_same_as_shipping",
                self.billing_address_same_as_shipping,
                "billing_address_same_as_shipping must be a boolean",
            ),
        };

        violations.into_result(|| Some(raw))
    }
}

/// The order created, or found again for a repeated request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlacedOrderResponse {
    pub order_id: String,
    pub order_code: String,
}
