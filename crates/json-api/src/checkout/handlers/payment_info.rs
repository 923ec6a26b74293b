//! Payment Info Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{Instrument, info_span};

use crate::{
    checkout::{errors::into_api_error, models::PaymentInfoResponse},
    extensions::*,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Payment Info Handler
///
/// Prices the cart as it is now and lists the payment methods on offer.
#[endpoint(
    tags("checkout"),
    summary = "Payment Info",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cost summary and payment methods"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Envelope<PaymentInfoResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let info = state
        .app
        .checkout
        .payment_info(user)
        .instrument(info_span!("checkout.payment_info", user.uuid = %user))
        .await
        .map_err(into_api_error)?;

    Ok(envelope("Get payment info successfully", info.into()))
}
