//! Order Records

use jiff::Timestamp;
use yori::{
    orders::{OrderItem, ShippingInfo, code::OrderCode, status::OrderStatus},
    pricing::CostSummary,
};

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub order_code: OrderCode,
    pub status: OrderStatus,
    pub shipping_info: ShippingInfo,
    pub note: Option<String>,

    /// Line snapshots in the order they were in the cart.
    pub items: Vec<OrderItem>,
    pub cost_summary: CostSummary,
    pub idempotency_key: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
