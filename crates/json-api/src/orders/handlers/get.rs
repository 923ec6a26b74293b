//! Order Get Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::{Instrument, info_span};
use yori_app::domain::orders::data::OrderLookup;

use crate::{
    extensions::*,
    orders::{errors::into_api_error, models::OrderDetailResponse},
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Order Get Handler
///
/// Returns one of the user's orders, addressed by id or by order code.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Envelope<OrderDetailResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let order_id = order_id.into_inner();
    let lookup = OrderLookup::parse(order_id.trim());
    let span = info_span!("orders.get", user.uuid = %user, order.id = %order_id);

    let order = state
        .app
        .orders
        .find_order(user, &lookup)
        .instrument(span)
        .await
        .map_err(into_api_error)?;

    Ok(envelope("Get order details successfully", order.into()))
}
