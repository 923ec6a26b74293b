//! Checkout Init Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{Instrument, info_span};

use crate::{
    checkout::{errors::into_api_error, models::CheckoutInitResponse},
    extensions::*,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Checkout Init Handler
///
/// Returns the user's contact details and saved addresses to prefill the
/// checkout form.
#[endpoint(
    tags("checkout"),
    summary = "Checkout Init",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Checkout details"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Envelope<CheckoutInitResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let init = state
        .app
        .checkout
        .init(user)
        .instrument(info_span!("checkout.init", user.uuid = %user))
        .await
        .map_err(into_api_error)?;

    Ok(envelope("Get checkout init info successfully", init.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use yori_app::domain::checkout::{
        CheckoutServiceError, MockCheckoutService,
        records::{CheckoutInit, DEFAULT_ADDRESS_ID, SavedAddress},
    };

    use crate::{
        responses::ErrorBody,
        test_helpers::{TEST_USER_UUID, checkout_service},
    };

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        checkout_service(checkout, Router::with_path("checkout/init").get(handler))
    }

    #[tokio::test]
    async fn test_init_returns_user_and_default_address() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_init()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| {
                Ok(CheckoutInit {
                    full_name: "Nguyễn Thị Lan".to_string(),
                    email: "lan@example.com".to_string(),
                    phone: Some("0901234567".to_string()),
                    saved_addresses: vec![SavedAddress {
                        id: DEFAULT_ADDRESS_ID,
                        full_name: "Nguyễn Thị Lan".to_string(),
                        phone: Some("0901234567".to_string()),
                        email: "lan@example.com".to_string(),
                        address: "12 Lê Lợi, Quận 1, TP.HCM".to_string(),
                        is_default: true,
                    }],
                })
            });
        checkout.expect_payment_info().never();
        checkout.expect_place_order().never();

        let mut res = TestClient::get("http://example.com/checkout/init")
            .send(&make_service(checkout))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["message"], "Get checkout init info successfully");
        assert_eq!(
            body["data"],
            json!({
                "user": {
                    "name": "Nguyễn Thị Lan",
                    "email": "lan@example.com",
                    "phone": "0901234567",
                },
                "saved_addresses": [{
                    "id": "default",
                    "full_name": "Nguyễn Thị Lan",
                    "phone": "0901234567",
                    "email": "lan@example.com",
                    "full_address": "12 Lê Lợi, Quận 1, TP.HCM",
                    "is_default": true,
                }],
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_init_unknown_user_returns_404() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_init()
            .once()
            .return_once(|_| Err(CheckoutServiceError::UserNotFound));
        checkout.expect_payment_info().never();
        checkout.expect_place_order().never();

        let mut res = TestClient::get("http://example.com/checkout/init")
            .send(&make_service(checkout))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "User not found");

        Ok(())
    }
}
