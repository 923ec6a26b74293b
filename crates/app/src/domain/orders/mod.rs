//! Orders
//!
//! Orders are created once by checkout and never deleted. Only their status
//! changes afterwards, following [`yori::orders::status::OrderStatus`].

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
