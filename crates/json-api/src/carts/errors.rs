//! Cart Errors

use tracing::error;
use yori_app::domain::carts::CartsServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::NotFound => ApiError::not_found("Cart item not found"),
        CartsServiceError::ProductNotFound | CartsServiceError::InvalidReference => {
            ApiError::not_found("Product not found")
        }
        CartsServiceError::InvalidData => {
            ApiError::invalid_field("buy_count", "Buy count is too large")
        }
        CartsServiceError::MissingRequiredData => ApiError::bad_request("Invalid cart data"),
        CartsServiceError::Sql(source) => {
            error!("failed to update cart: {source}");

            ApiError::internal()
        }
    }
}
