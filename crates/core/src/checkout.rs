//! Checkout details
//!
//! Validation of the details a customer submits when placing an order.

use crate::{
    orders::ShippingInfo,
    payments::PaymentMethod,
    shipping::STANDARD_DELIVERY_ESTIMATE,
    validation::Violations,
};

/// Place-order fields as received, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlaceOrder {
    /// Payment method identifier, e.g. `cod`.
    pub payment_method: Option<String>,

    /// Delivery address.
    pub shipping_address: Option<String>,

    /// Person receiving the parcel.
    pub receiver_name: Option<String>,

    /// Receiver's phone number.
    pub phone: Option<String>,

    /// Receiver's email address.
    pub email: Option<String>,

    /// Free-form note for the shop.
    pub note: Option<String>,

    /// Whether billing uses the shipping address.
    pub billing_address_same_as_shipping: Option<bool>,
}

/// Validated place-order details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderDetails {
    /// Delivery and payment details recorded on the order.
    pub shipping_info: ShippingInfo,

    /// Trimmed note, if one was given.
    pub note: Option<String>,

    /// Whether billing uses the shipping address. Defaults to `true`.
    pub billing_address_same_as_shipping: bool,
}

impl PlaceOrderDetails {
    /// Validate every field, reporting all problems together.
    ///
    /// # Errors
    ///
    /// Returns the collected [`Violations`] when any field is missing, blank or
    /// malformed, or when the payment method is unknown or disabled.
    pub fn parse(raw: RawPlaceOrder) -> Result<Self, Violations> {
        let mut violations = Violations::new();

        let payment_method = raw
            .payment_method
            .as_deref()
            .map(str::trim)
            .and_then(|value| value.parse::<PaymentMethod>().ok());

        let payment_method = match payment_method {
            Some(method) if method.is_enabled() => Some(method),
            Some(_) => {
                violations.push("payment_method", "Payment method is not available");
                None
            }
            None => {
                violations.push("payment_method", "Invalid payment method");
                None
            }
        };

        let address = violations.required_text(
            "shipping_address",
            raw.shipping_address,
            "Shipping address is required",
        );
        let receiver_name = violations.required_text(
            "receiver_name",
            raw.receiver_name,
            "Receiver name is required",
        );
        let phone = violations.required_text("phone", raw.phone, "Phone is required");
        let email = violations.required_email("email", raw.email, "Valid email is required");

        let note = raw
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        let billing_address_same_as_shipping = raw.billing_address_same_as_shipping.unwrap_or(true);

        violations.into_result(|| {
            Some(Self {
                shipping_info: ShippingInfo {
                    receiver_name: receiver_name?,
                    phone: phone?,
                    email: email?,
                    address: address?,
                    payment_method: payment_method?,
                    estimated_delivery: STANDARD_DELIVERY_ESTIMATE.to_string(),
                },
                note,
                billing_address_same_as_shipping,
            })
        })
    }
}
