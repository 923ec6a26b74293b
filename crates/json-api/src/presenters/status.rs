//! Order status wording.

use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use yori::orders::status::OrderStatus;

use crate::presenters::dates::display_short_date_time;

pub(crate) const fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Đang xử lý",
        OrderStatus::Processing => "Đang chuẩn bị hàng",
        OrderStatus::Shipping => "Đang giao hàng",
        OrderStatus::Completed => "Giao hàng thành công",
        OrderStatus::Cancelled => "Đã hủy",
    }
}

pub(crate) const fn status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "green",
        OrderStatus::Cancelled => "red",
        OrderStatus::Shipping => "blue",
        OrderStatus::Pending | OrderStatus::Processing => "orange",
    }
}

/// One step of the delivery progress shown on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct TimelineStep {
    /// `placed`, `confirmed`, `shipping` or `completed`.
    pub step: String,
    pub label: String,
    pub completed: bool,

    /// Only known for the placed step.
    pub time: String,
}

/// Progress of an order placed at `placed_at` that is now in `status`.
pub(crate) fn timeline(status: OrderStatus, placed_at: Timestamp) -> Vec<TimelineStep> {
    let confirmed = !matches!(status, OrderStatus::Pending | OrderStatus::Cancelled);
    let shipping = matches!(status, OrderStatus::Shipping | OrderStatus::Completed);
    let completed = status == OrderStatus::Completed;

    [
        ("placed", "Đã đặt", true, display_short_date_time(placed_at)),
        ("confirmed", "Đã xác nhận", confirmed, String::new()),
        ("shipping", "Đang giao", shipping, String::new()),
        ("completed", "Đã giao", completed, String::new()),
    ]
    .into_iter()
    .map(|(step, label, completed, time)| TimelineStep {
        step: step.to_owned(),
        label: label.to_owned(),
        completed,
        time,
    })
    .collect()
}
