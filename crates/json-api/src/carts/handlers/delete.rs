//! Cart Delete Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::{Instrument, info_span};
use uuid::Uuid;
use yori_app::domain::carts::records::CartItemUuid;

use crate::{
    carts::{errors::into_api_error, models::CartResponse},
    extensions::*,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Cart Delete Item Handler
///
/// Removes one line from the user's cart. Removing a line that is not in the
/// cart succeeds and returns the cart unchanged.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
    ),
)]
pub(crate) async fn handler(
    item_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Envelope<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let carts = &state.app.carts;
    let span = info_span!("cart.remove_item", user.uuid = %user, item.id = %item_id.as_str());

    let cart = match Uuid::try_parse(item_id.trim()) {
        Ok(item) => {
            carts
                .remove_item(user, CartItemUuid::from_uuid(item))
                .instrument(span)
                .await
        }
        Err(_not_uuid) => carts.get_cart(user).instrument(span).await,
    }
    .map_err(into_api_error)?;

    Ok(envelope("Delete cart item successfully", cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use yori_app::domain::carts::{MockCartsService, records::CartRecord};

    use crate::test_helpers::{TEST_USER_UUID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/items/{item_id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_removes_item() -> TestResult {
        let item = CartItemUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(move |user, uuid| *user == TEST_USER_UUID && *uuid == item)
            .return_once(|user, _| Ok(CartRecord::empty(user)));
        carts.expect_get_cart().never();
        carts.expect_add_item().never();
        carts.expect_update_item().never();

        let mut res = TestClient::delete(format!("http://example.com/cart/items/{item}"))
            .send(&make_service(carts))
            .await;

        let body: Envelope<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Delete cart item successfully");
        assert!(body.data.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_malformed_item_id_returns_cart_unchanged() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|user| Ok(CartRecord::empty(user)));
        carts.expect_remove_item().never();
        carts.expect_add_item().never();
        carts.expect_update_item().never();

        let res = TestClient::delete("http://example.com/cart/items/line-1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
