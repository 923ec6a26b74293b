//! Products service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// Another product already uses the uuid or slug.
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    /// Blank name or slug, or a negative price.
    #[error("invalid data")]
    InvalidData,

    #[error("price is out of range")]
    PriceOutOfRange(#[from] TryFromIntError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(
            matches!(
                ProductsServiceError::from(Error::RowNotFound),
                ProductsServiceError::NotFound
            ),
            "RowNotFound should become NotFound"
        );
    }

    #[test]
    fn other_errors_are_storage_errors() {
        assert!(
            matches!(
                ProductsServiceError::from(Error::PoolTimedOut),
                ProductsServiceError::Sql(_)
            ),
            "pool timeouts should be storage errors"
        );
    }
}
