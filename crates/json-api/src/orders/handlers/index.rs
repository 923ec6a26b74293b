//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::{Instrument, info_span};
use yori::{
    orders::status::OrderStatus,
    pagination::PageRequest,
    validation::Violations,
};
use yori_app::domain::orders::data::OrderQuery;

use crate::{
    extensions::*,
    orders::{
        errors::into_api_error,
        models::{OrderListItem, OrdersResponse},
    },
    presenters::dates::{DayBound, parse_date_bound},
    responses::{ApiError, Envelope, envelope},
    state::State,
};

const PAGE_MESSAGE: &str = "Page must be a positive integer";

const LIMIT_MESSAGE: &str = "Limit must be an integer between 1 and 100";

/// Raw listing parameters, as strings so every problem can be reported.
#[derive(Debug, Default)]
pub(crate) struct OrderListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl OrderListParams {
    /// Validate every parameter. Blank values count as absent.
    pub(crate) fn into_query(self) -> Result<OrderQuery, Violations> {
        let mut violations = Violations::new();

        let page = parse_number(&mut violations, "page", self.page.as_deref(), PAGE_MESSAGE);
        let limit = parse_number(&mut violations, "limit", self.limit.as_deref(), LIMIT_MESSAGE);

        // Checked apart so a bad page does not hide a bad limit.
        if PageRequest::new(page, None).is_err() {
            violations.push("page", PAGE_MESSAGE);
        }

        if PageRequest::new(None, limit).is_err() {
            violations.push("limit", LIMIT_MESSAGE);
        }

        let page_request = PageRequest::new(page, limit).unwrap_or_default();

        let status = non_blank(self.status.as_deref()).and_then(|value| {
            value
                .parse::<OrderStatus>()
                .map_err(|_unknown| violations.push("status", "Invalid order status"))
                .ok()
        });

        let created_from = non_blank(self.start_date.as_deref()).and_then(|value| {
            parse_date_bound(value, DayBound::Start)
                .map_err(|_invalid| violations.push("start_date", "Invalid start date"))
                .ok()
        });

        let created_to = non_blank(self.end_date.as_deref()).and_then(|value| {
            parse_date_bound(value, DayBound::End)
                .map_err(|_invalid| violations.push("end_date", "Invalid end date"))
                .ok()
        });

        let keyword = non_blank(self.keyword.as_deref()).map(str::to_owned);

        violations.into_result(|| {
            Some(OrderQuery {
                page: page_request,
                keyword,
                status,
                created_from,
                created_to,
            })
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_number(
    violations: &mut Violations,
    field: &'static str,
    value: Option<&str>,
    message: &'static str,
) -> Option<u32> {
    let value = non_blank(value)?;

    match value.parse::<u32>() {
        Ok(number) => Some(number),
        Err(_invalid) => {
            violations.push(field, message);
            None
        }
    }
}

/// Order Index Handler
///
/// Returns the user's orders, newest first.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders listed"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid filters"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    keyword: QueryParam<String, false>,
    status: QueryParam<String, false>,
    start_date: QueryParam<String, false>,
    end_date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Envelope<OrdersResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let query = OrderListParams {
        page: page.into_inner(),
        limit: limit.into_inner(),
        keyword: keyword.into_inner(),
        status: status.into_inner(),
        start_date: start_date.into_inner(),
        end_date: end_date.into_inner(),
    }
    .into_query()?;

    let page = state
        .app
        .orders
        .list_orders(user, query)
        .instrument(info_span!("orders.list", user.uuid = %user))
        .await
        .map_err(into_api_error)?;

    Ok(envelope(
        "Get orders successfully",
        OrdersResponse {
            items: page.orders.iter().map(OrderListItem::from).collect(),
            pagination: page.pagination.into(),
        },
    ))
}
