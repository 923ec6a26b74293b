//! Amounts with their dong display strings.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use yori::{
    money::{format_vnd, format_vnd_deduction},
    pricing::CostSummary,
};

/// Order or cart amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CostSummaryView {
    pub subtotal: u64,
    pub subtotal_display: String,
    pub shipping_fee: u64,
    pub shipping_display: String,
    pub discount_amount: u64,

    /// Shown as a deduction, e.g. `-0đ`.
    pub discount_display: String,
    pub total: u64,
    pub total_display: String,
}

impl From<CostSummary> for CostSummaryView {
    fn from(summary: CostSummary) -> Self {
        Self {
            subtotal: summary.subtotal,
            subtotal_display: format_vnd(summary.subtotal),
            shipping_fee: summary.shipping_fee,
            shipping_display: format_vnd(summary.shipping_fee),
            discount_amount: summary.discount_amount,
            discount_display: format_vnd_deduction(summary.discount_amount),
            total: summary.total,
            total_display: format_vnd(summary.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_every_amount() {
        let view = CostSummaryView::from(CostSummary {
            subtotal: 250_000,
            shipping_fee: 30_000,
            discount_amount: 0,
            total: 280_000,
        });

        assert_eq!(view.subtotal_display, "250.000đ");
        assert_eq!(view.shipping_display, "30.000đ");
        assert_eq!(view.discount_display, "-0đ");
        assert_eq!(view.total_display, "280.000đ");
    }
}
