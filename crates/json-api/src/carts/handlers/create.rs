//! Cart Add Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{Instrument, info_span};
use uuid::Uuid;
use yori::{validation::Violations, variants::Variant};
use yori_app::domain::{
    carts::{data::NewCartItem, records::CartItemUuid},
    products::records::ProductUuid,
};

use crate::{
    carts::{
        errors::into_api_error,
        models::{CartResponse, parse_buy_count},
    },
    extensions::*,
    fields::text,
    responses::{ApiError, Envelope, envelope},
    state::State,
};

/// Add To Cart Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// Product UUID.
    pub product_id: Option<Value>,

    /// Positive whole number added to any existing line for the same variant.
    pub buy_count: Option<Value>,
    pub color: Option<Value>,
    pub size: Option<Value>,
}

impl AddToCartRequest {
    /// Validate every field, reporting all problems at once.
    pub(crate) fn into_new_item(self) -> Result<NewCartItem, Violations> {
        let mut violations = Violations::new();

        let product_id = match self.product_id {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value),
            Some(other) => Some(other.to_string()),
        };

        let product_uuid = match product_id.as_deref().map(str::trim) {
            None | Some("") => {
                violations.push("product_id", "Product ID is required");
                None
            }
            Some(value) => Uuid::try_parse(value)
                .map_err(|_invalid| violations.push("product_id", "Invalid Product ID format"))
                .ok()
                .map(ProductUuid::from_uuid),
        };

        let buy_count = parse_buy_count(&mut violations, self.buy_count);
        let color = text(&mut violations, "color", self.color, "Color must be a string");
        let size = text(&mut violations, "size", self.size, "Size must be a string");
        let variant = Variant::new(color, size);

        violations.into_result(|| {
            Some(NewCartItem {
                uuid: CartItemUuid::new(),
                product_uuid: product_uuid?,
                buy_count: buy_count?,
                variant,
            })
        })
    }
}

/// Cart Add Item Handler
///
/// Adds a product to the user's cart, creating the cart on first use.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid item"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let item = json.into_inner().into_new_item()?;
    let span = info_span!(
        "cart.add_item",
        user.uuid = %user,
        product.uuid = %item.product_uuid
    );

    let cart = state
        .app
        .carts
        .add_item(user, item)
        .instrument(span)
        .await
        .map_err(into_api_error)?;

    Ok(envelope("Add to cart successfully", cart.into()))
}
