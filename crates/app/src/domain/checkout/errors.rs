//! Checkout service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;
use yori::{orders::assembly::AssemblyError, pricing::PricingError};

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    #[error("user not found")]
    UserNotFound,

    /// Every generated order code was already taken.
    #[error("could not allocate a unique order code")]
    CodeConflict,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<AssemblyError> for CheckoutServiceError {
    fn from(error: AssemblyError) -> Self {
        match error {
            AssemblyError::EmptyCart => Self::EmptyCart,
            AssemblyError::Pricing(error) => Self::Pricing(error),
        }
    }
}

impl From<Error> for CheckoutServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::CodeConflict,
            Some(ErrorKind::ForeignKeyViolation) => Self::UserNotFound,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_assembly_error_maps_to_empty_cart() {
        assert!(
            matches!(
                CheckoutServiceError::from(AssemblyError::EmptyCart),
                CheckoutServiceError::EmptyCart
            ),
            "EmptyCart should stay EmptyCart"
        );
    }

    #[test]
    fn pool_errors_are_storage_errors() {
        assert!(
            matches!(
                CheckoutServiceError::from(Error::PoolTimedOut),
                CheckoutServiceError::Sql(_)
            ),
            "pool timeouts should be storage errors"
        );
    }
}
