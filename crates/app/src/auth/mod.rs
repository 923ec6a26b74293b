//! Authentication
//!
//! Customers authenticate with bearer API tokens issued from the admin CLI.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
