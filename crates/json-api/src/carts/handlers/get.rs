//! Cart Get Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{Instrument, info_span};

use crate::{
    carts::{errors::into_api_error, models::CartResponse},
    extensions::*,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Cart Get Handler
///
/// Returns the user's cart. A user who never added anything gets an empty one.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Envelope<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .instrument(info_span!("cart.get", user.uuid = %user))
        .await
        .map_err(into_api_error)?;

    Ok(envelope("Get cart successfully", cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use yori_app::domain::carts::{
        CartsServiceError, MockCartsService,
        records::{CartItemUuid, CartRecord},
    };

    use crate::{
        responses::ErrorBody,
        test_helpers::{TEST_USER_UUID, carts_service, make_cart, make_cart_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_cart() -> TestResult {
        let item = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(make_cart(vec![make_cart_item(item, 100_000, 2)])));
        carts.expect_add_item().never();
        carts.expect_update_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let body: Envelope<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Get cart successfully");
        assert_eq!(body.data.items.len(), 1);
        assert_eq!(body.data.items[0].item_id, item.to_string());
        assert_eq!(body.data.items[0].price, 100_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_without_cart_returns_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|user| Ok(CartRecord::empty(user)));
        carts.expect_add_item().never();
        carts.expect_update_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body["data"],
            serde_json::json!({ "items": [], "created_at": null, "updated_at": null })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_error_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));
        carts.expect_add_item().never();
        carts.expect_update_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Internal Server Error");

        Ok(())
    }
}
