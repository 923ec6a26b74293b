//! Place Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::{Instrument, info, info_span};
use yori::checkout::PlaceOrderDetails;
use yori_app::domain::{checkout::data::PlaceOrder, orders::data::IdempotencyKey};

use crate::{
    checkout::{
        errors::into_api_error,
        models::{PlaceOrderRequest, PlacedOrderResponse},
    },
    extensions::*,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Header a client sets to make a submission safe to repeat.
pub(crate) const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// The `Idempotency-Key` header, if one was sent.
fn idempotency_key(req: &Request) -> Result<Option<IdempotencyKey>, ApiError> {
    let Some(value) = req.headers().get(IDEMPOTENCY_KEY_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|value| IdempotencyKey::parse(value).ok())
        .map(Some)
        .ok_or_else(|| {
            ApiError::invalid_field(
                "Idempotency-Key",
                "Idempotency key must be 1-255 visible ASCII characters",
            )
        })
}

/// Place Order Handler
///
/// Turns the user's cart into an order and empties the cart. A request
/// repeating an earlier `Idempotency-Key` returns the order it created with
/// `200 OK` instead of `201 Created`.
#[endpoint(
    tags("checkout"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::OK, description = "Order placed by an earlier identical request"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::CONFLICT, description = "Order code collision"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid order details"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<PlacedOrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let idempotency_key = idempotency_key(req)?;
    let details = PlaceOrderDetails::parse(json.into_inner().into_raw()?)?;

    let placed = state
        .app
        .checkout
        .place_order(
            user,
            PlaceOrder {
                details,
                idempotency_key,
            },
        )
        .instrument(info_span!("checkout.place_order", user.uuid = %user))
        .await
        .map_err(into_api_error)?;

    if placed.replayed {
        info!(
            user.uuid = %user,
            order.uuid = %placed.order_uuid,
            "repeated checkout returned existing order"
        );

        res.status_code(StatusCode::OK);
    } else {
        res.add_header(LOCATION, format!("/orders/{}", placed.order_uuid), true)
            .or_500("failed to set location header")?
            .status_code(StatusCode::CREATED);
    }

    Ok(envelope(
        "Place order successfully",
        PlacedOrderResponse {
            order_id: placed.order_uuid.to_string(),
            order_code: placed.order_code.to_string(),
        },
    ))
}
