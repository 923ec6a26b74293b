//! Order Errors

use tracing::error;
use yori_app::domain::orders::OrdersServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::AlreadyExists => ApiError::conflict("Order already exists"),
        OrdersServiceError::InvalidTransition(source) => ApiError::conflict(source.to_string()),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => ApiError::bad_request("Invalid order data"),
        OrdersServiceError::Sql(source) => {
            error!("failed to load orders: {source}");

            ApiError::internal()
        }
    }
}
