//! Checkout Errors

use tracing::error;
use yori_app::domain::checkout::CheckoutServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: CheckoutServiceError) -> ApiError {
    match error {
        CheckoutServiceError::EmptyCart => ApiError::bad_request("Cart is empty"),
        CheckoutServiceError::UserNotFound => ApiError::not_found("User not found"),
        CheckoutServiceError::CodeConflict => {
            ApiError::conflict("Could not allocate an order code, please retry")
        }
        CheckoutServiceError::Pricing(source) => {
            error!("cart could not be priced: {source}");

            ApiError::bad_request("Cart total is out of range")
        }
        CheckoutServiceError::InvalidData => ApiError::bad_request("Invalid order data"),
        CheckoutServiceError::Sql(source) => {
            error!("checkout failed: {source}");

            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn empty_cart_is_a_bad_request() {
        let error = into_api_error(CheckoutServiceError::EmptyCart);

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Cart is empty");
    }

    #[test]
    fn exhausted_order_codes_conflict() {
        assert_eq!(
            into_api_error(CheckoutServiceError::CodeConflict).status(),
            StatusCode::CONFLICT
        );
    }
}
