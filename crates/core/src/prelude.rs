//! Yori prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    checkout::{PlaceOrderDetails, RawPlaceOrder},
    money::{CURRENCY, format_vnd},
    orders::{
        OrderItem, ShippingInfo,
        assembly::{AssembledOrder, AssemblyError, CheckoutLine, assemble},
        code::{OrderCode, OrderCodeGenerator},
        status::{OrderStatus, StatusTransitionError},
    },
    pagination::{PageError, PageRequest, Pagination},
    payments::{PaymentMethod, PaymentMethodDescriptor},
    pricing::{CostSummary, PricingError},
    quantity::{Quantity, QuantityError},
    shipping::{ShippingAddress, ShippingMethod, ShippingQuote},
    validation::{FieldViolation, Violations},
    variants::Variant,
};
