//! Cart Update Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::{Instrument, info_span};
use uuid::Uuid;
use yori::validation::Violations;
use yori_app::domain::carts::records::CartItemUuid;

use crate::{
    carts::{
        errors::into_api_error,
        models::{BuyCountRequest, CartResponse, parse_buy_count},
    },
    extensions::*,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Cart Update Item Handler
///
/// Overwrites the quantity of one line of the user's cart.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
    ),
)]
pub(crate) async fn handler(
    item_id: PathParam<String>,
    json: JsonBody<BuyCountRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let mut violations = Violations::new();
    let buy_count = parse_buy_count(&mut violations, json.into_inner().buy_count);
    let buy_count = violations.into_result(|| buy_count)?;

    // An id that is not a uuid cannot name a line of any cart.
    let item = Uuid::try_parse(item_id.trim())
        .map(CartItemUuid::from_uuid)
        .map_err(|_invalid| ApiError::not_found("Cart item not found"))?;

    let cart = state
        .app
        .carts
        .update_item(user, item, buy_count)
        .instrument(info_span!(
            "cart.update_item",
            user.uuid = %user,
            item.uuid = %item
        ))
        .await
        .map_err(into_api_error)?;

    Ok(envelope("Update cart item successfully", cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use yori_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{
        responses::ErrorBody,
        test_helpers::{TEST_USER_UUID, carts_service, make_cart, make_cart_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/items/{item_id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_overwrites_quantity() -> TestResult {
        let item = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(move |user, uuid, buy_count| {
                *user == TEST_USER_UUID && *uuid == item && buy_count.get() == 5
            })
            .return_once(move |_, _, _| Ok(make_cart(vec![make_cart_item(item, 100_000, 5)])));
        carts.expect_get_cart().never();
        carts.expect_add_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::put(format!("http://example.com/cart/items/{item}"))
            .json(&json!({ "buy_count": 5 }))
            .send(&make_service(carts))
            .await;

        let body: Envelope<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Update cart item successfully");
        assert_eq!(body.data.items[0].buy_count, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_rejects_non_positive_quantity() -> TestResult {
        for buy_count in [json!(0), json!(-1), json!(2.5), json!("abc"), json!(true)] {
            let mut carts = MockCartsService::new();

            carts.expect_update_item().never();
            carts.expect_get_cart().never();
            carts.expect_add_item().never();
            carts.expect_remove_item().never();

            let mut res = TestClient::put(format!(
                "http://example.com/cart/items/{}",
                CartItemUuid::new()
            ))
            .json(&json!({ "buy_count": buy_count }))
            .send(&make_service(carts))
            .await;

            let body: ErrorBody = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
            assert_eq!(body.errors[0].field, "buy_count");
            assert_eq!(body.errors[0].message, "Buy count must be a positive integer");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_update_accepts_buy_count_as_text() -> TestResult {
        let item = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(move |_, uuid, buy_count| *uuid == item && buy_count.get() == 4)
            .return_once(move |_, _, _| Ok(make_cart(vec![make_cart_item(item, 100_000, 4)])));
        carts.expect_get_cart().never();
        carts.expect_add_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::put(format!("http://example.com/cart/items/{item}"))
            .json(&json!({ "buy_count": "4" }))
            .send(&make_service(carts))
            .await;

        let body: Envelope<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.data.items[0].buy_count, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));
        carts.expect_get_cart().never();
        carts.expect_add_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::put(format!(
            "http://example.com/cart/items/{}",
            CartItemUuid::new()
        ))
        .json(&json!({ "buy_count": 1 }))
        .send(&make_service(carts))
        .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Cart item not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_malformed_item_id_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_item().never();
        carts.expect_get_cart().never();
        carts.expect_add_item().never();
        carts.expect_remove_item().never();

        let res = TestClient::put("http://example.com/cart/items/line-1")
            .json(&json!({ "buy_count": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
