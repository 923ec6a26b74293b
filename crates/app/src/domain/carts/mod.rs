//! Carts
//!
//! One cart per user, created on the first add. Lines are keyed by product,
//! colour and size: adding the same combination again increases its quantity.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
