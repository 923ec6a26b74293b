//! Validate Shipping Handler

use salvo::{oapi::extract::JsonBody, prelude::*};
use yori::shipping::{ShippingAddress, quote};

use crate::{
    checkout::models::{ShippingQuoteResponse, ValidateShippingRequest},
    extensions::*,
    responses::{ApiError, Envelope, envelope},
};

/// Validate Shipping Handler
///
/// Checks a shipping address and quotes the fee and delivery methods for it.
#[endpoint(
    tags("checkout"),
    summary = "Validate Shipping Address",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Address accepted"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid address"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ValidateShippingRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<ShippingQuoteResponse>>, ApiError> {
    depot.user_uuid_or_401()?;

    let address = ShippingAddress::parse(json.into_inner().into_raw()?)?;

    Ok(envelope("Validate shipping successfully", quote(&address).into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        responses::ErrorBody,
        test_helpers::{Mocks, service},
    };

    use super::*;

    fn make_service() -> Service {
        service(
            Mocks::default(),
            Router::with_path("checkout/validate-shipping").post(handler),
        )
    }

    #[tokio::test]
    async fn test_validate_returns_fee_and_methods() -> TestResult {
        let mut res = TestClient::post("http://example.com/checkout/validate-shipping")
            .json(&json!({
                "full_name": "Nguyễn Thị Lan",
                "phone": "0901234567",
                "email": "lan@example.com",
                "province_id": "79",
                "district_id": "760",
                "ward_id": "26734",
                "address": "12 Lê Lợi",
            }))
            .send(&make_service())
            .await;

        let body: Envelope<ShippingQuoteResponse> = res.take_json().await?;
        let ids: Vec<_> = body
            .data
            .shipping_methods
            .iter()
            .map(|method| method.id.as_str())
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Validate shipping successfully");
        assert_eq!(body.data.shipping_fee, 30_000);
        assert_eq!(ids, ["standard", "express"]);
        assert_eq!(body.data.shipping_methods[1].fee, 50_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_reports_every_missing_field() -> TestResult {
        let mut res = TestClient::post("http://example.com/checkout/validate-shipping")
            .json(&json!({ "full_name": "  ", "email": "not-an-email" }))
            .send(&make_service())
            .await;

        let body: ErrorBody = res.take_json().await?;
        let fields: Vec<_> = body.errors.iter().map(|error| error.field.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            fields,
            [
                "full_name",
                "phone",
                "email",
                "province_id",
                "district_id",
                "ward_id",
                "address",
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_mistyped_fields_return_422() -> TestResult {
        let mut res = TestClient::post("http://example.com/checkout/validate-shipping")
            .json(&json!({
                "full_name": "Nguyễn Thị Lan",
                "phone": "0901234567",
                "email": "lan@example.com",
                "province_id": 79,
                "district_id": "760",
                "ward_id": "26734",
                "address": "12 Lê Lợi",
            }))
            .send(&make_service())
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].field, "province_id");
        assert_eq!(body.errors[0].message, "Province ID must be a string");

        Ok(())
    }
}
