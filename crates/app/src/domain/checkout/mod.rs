//! Checkout
//!
//! Turns a user's cart into an order. Placing an order locks the cart row, so
//! checkouts and cart edits for one user never interleave.

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::CheckoutServiceError;
pub use service::*;
