//! Yori
//!
//! Pricing, shipping, order assembly and order lifecycle rules for the Yori
//! fashion storefront. Everything in this crate is pure: storage and transport
//! live in `yori-app` and `yori-json`.

pub mod checkout;
pub mod money;
pub mod orders;
pub mod pagination;
pub mod payments;
pub mod pricing;
pub mod quantity;
pub mod shipping;
pub mod validation;
pub mod variants;

pub mod prelude;
