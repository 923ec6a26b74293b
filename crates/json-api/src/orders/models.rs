//! Order response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use yori::{
    money::format_vnd,
    orders::{OrderItem, status::OrderStatus},
    pagination::Pagination,
};
use yori_app::domain::orders::records::OrderRecord;

use crate::presenters::{
    dates::{display_date, display_date_time},
    money::CostSummaryView,
    status::{TimelineStep, status_color, status_label, timeline},
};

/// One row of the order history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderListItem {
    pub id: String,
    pub order_code: String,

    /// RFC 3339 timestamp.
    pub created_at: String,

    /// `dd/mm/yyyy` in Vietnam time.
    pub created_at_display: String,

    /// Item names joined with `, `.
    pub product_summary: String,
    pub total_amount: u64,
    pub total_display: String,
    pub status: String,
    pub status_label: String,

    /// Storefront page showing the order.
    pub detail_link: String,
}

impl From<&OrderRecord> for OrderListItem {
    fn from(order: &OrderRecord) -> Self {
        Self {
            id: order.uuid.to_string(),
            order_code: order.order_code.to_string(),
            created_at: order.created_at.to_string(),
            created_at_display: display_date(order.created_at),
            product_summary: order
                .items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            total_amount: order.cost_summary.total,
            total_display: format_vnd(order.cost_summary.total),
            status: order.status.to_string(),
            status_label: status_label(order.status).to_owned(),
            detail_link: format!("/account/orders/{}", order.order_code),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaginationResponse {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
    pub total_records: u64,
}

impl From<Pagination> for PaginationResponse {
    fn from(pagination: Pagination) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total_pages: pagination.total_pages,
            total_records: pagination.total_records,
        }
    }
}

/// A page of the order history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub items: Vec<OrderListItem>,
    pub pagination: PaginationResponse,
}

/// A purchased line as shown on the order page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// Lines are identified by the product they were bought from.
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub variant_text: String,
    pub price: u64,
    pub price_display: String,
    pub quantity: u32,
    pub total: u64,
    pub total_display: String,

    /// Reviews open once the order is delivered.
    pub can_review: bool,
    pub is_reviewed: bool,
}

impl OrderItemResponse {
    fn new(item: &OrderItem, can_review: bool) -> Self {
        Self {
            id: item.product_uuid.to_string(),
            product_id: item.product_uuid.to_string(),
            name: item.name.clone(),
            thumbnail_url: item.thumbnail_url.clone(),
            variant_text: item.variant_text.clone(),
            price: item.price,
            price_display: format_vnd(item.price),
            quantity: item.quantity.get(),
            total: item.total,
            total_display: format_vnd(item.total),
            can_review,
            is_reviewed: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingAddressResponse {
    pub receiver_name: String,
    pub phone: String,
    pub email: String,
    pub full_address: String,
}

/// Everything shown on the order page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderDetailResponse {
    pub id: String,
    pub order_code: String,
    pub created_at: String,

    /// `hh:mm:ss dd/mm/yyyy` in Vietnam time.
    pub created_at_display: String,
    pub current_status: String,
    pub status_label: String,

    /// `green`, `red`, `blue` or `orange`.
    pub status_color: String,
    pub timeline: Vec<TimelineStep>,
    pub items: Vec<OrderItemResponse>,
    pub summary: CostSummaryView,
    pub shipping_address: ShippingAddressResponse,
    pub payment_method: String,
    pub estimated_delivery: String,
    pub note: Option<String>,
}

impl From<OrderRecord> for OrderDetailResponse {
    fn from(order: OrderRecord) -> Self {
        let can_review = order.status == OrderStatus::Completed;

        Self {
            id: order.uuid.to_string(),
            order_code: order.order_code.to_string(),
            created_at: order.created_at.to_string(),
            created_at_display: display_date_time(order.created_at),
            current_status: order.status.to_string(),
            status_label: status_label(order.status).to_owned(),
            status_color: status_color(order.status).to_owned(),
            timeline: timeline(order.status, order.created_at),
            items: order
                .items
                .iter()
                .map(|item| OrderItemResponse::new(item, can_review))
                .collect(),
            summary: order.cost_summary.into(),
            shipping_address: ShippingAddressResponse {
                receiver_name: order.shipping_info.receiver_name,
                phone: order.shipping_info.phone,
                email: order.shipping_info.email,
                full_address: order.shipping_info.address,
            },
            payment_method: order.shipping_info.payment_method.to_string(),
            estimated_delivery: order.shipping_info.estimated_delivery,
            note: order.note,
        }
    }
}
