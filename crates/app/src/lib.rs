//! Persistence and services for the Yori storefront.
//!
//! Services are traits so the HTTP layer can be tested against mocks; the
//! `Pg*` implementations run every operation inside a PostgreSQL transaction.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
