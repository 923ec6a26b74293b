//! Order assembly
//!
//! Turns the current contents of a cart into order line snapshots and the
//! order's cost summary.

use thiserror::Error;
use uuid::Uuid;

use crate::{
    orders::OrderItem,
    pricing::{CostSummary, NO_DISCOUNT, PricingError, line_total},
    quantity::Quantity,
    variants::Variant,
};

/// Errors raised while assembling an order.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A line or the order total could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A cart line with its product's current display fields resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLine {
    /// Product the line refers to.
    pub product_uuid: Uuid,

    /// Current product name.
    pub name: String,

    /// Current product image.
    pub image_url: String,

    /// Current unit price.
    pub price: u64,

    /// Units in the cart.
    pub quantity: Quantity,

    /// Chosen colour and size.
    pub variant: Variant,
}

impl CheckoutLine {
    /// Snapshot this line as an order item.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] when the line total overflows.
    pub fn to_order_item(&self) -> Result<OrderItem, PricingError> {
        Ok(OrderItem {
            product_uuid: self.product_uuid,
            name: self.name.clone(),
            thumbnail_url: self.image_url.clone(),
            variant_text: self.variant.text(),
            price: self.price,
            quantity: self.quantity,
            total: line_total(self.price, self.quantity)?,
        })
    }
}

/// Order lines and amounts ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledOrder {
    /// Line snapshots, in cart order. Never empty.
    pub items: Vec<OrderItem>,

    /// Amounts for the order.
    pub cost_summary: CostSummary,
}

/// Cost summary for whatever is in the cart right now. An empty cart is
/// priced at the shipping fee alone.
///
/// # Errors
///
/// Returns [`PricingError`] when any amount overflows.
pub fn summarize(lines: &[CheckoutLine], shipping_fee: u64) -> Result<CostSummary, PricingError> {
    let totals = lines
        .iter()
        .map(|line| line_total(line.price, line.quantity))
        .collect::<Result<Vec<_>, _>>()?;

    CostSummary::from_line_totals(totals, shipping_fee, NO_DISCOUNT)
}

/// Assemble an order from cart lines.
///
/// # Errors
///
/// Returns [`AssemblyError::EmptyCart`] when there are no lines, or
/// [`AssemblyError::Pricing`] when any amount overflows.
pub fn assemble(lines: &[CheckoutLine], shipping_fee: u64) -> Result<AssembledOrder, AssemblyError> {
    if lines.is_empty() {
        return Err(AssemblyError::EmptyCart);
    }

    let items = lines
        .iter()
        .map(CheckoutLine::to_order_item)
        .collect::<Result<Vec<_>, _>>()?;

    let cost_summary = CostSummary::from_line_totals(
        items.iter().map(|item| item.total),
        shipping_fee,
        NO_DISCOUNT,
    )?;

    Ok(AssembledOrder {
        items,
        cost_summary,
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::shipping::STANDARD_SHIPPING_FEE;

    use super::*;

    fn line(name: &str, price: u64, quantity: u32, variant: Variant) -> TestResult<CheckoutLine> {
        Ok(CheckoutLine {
            product_uuid: Uuid::now_v7(),
            name: name.to_string(),
            image_url: format!("https://cdn.example.com/{name}.jpg"),
            price,
            quantity: Quantity::new(quantity)?,
            variant,
        })
    }

    #[test]
    fn assemble_rejects_empty_cart() {
        let result = assemble(&[], STANDARD_SHIPPING_FEE);

        assert!(
            matches!(result, Err(AssemblyError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[test]
    fn assemble_snapshots_lines_and_prices_order() -> TestResult {
        let lines = [
            line(
                "ao-thun",
                100_000,
                2,
                Variant::new(Some("Đen".to_string()), Some("M".to_string())),
            )?,
            line("mu-luoi-trai", 50_000, 1, Variant::default())?,
        ];

        let order = assemble(&lines, STANDARD_SHIPPING_FEE)?;

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].total, 200_000);
        assert_eq!(order.items[0].variant_text, "Màu: Đen | Size: M");
        assert_eq!(order.items[0].thumbnail_url, "https://cdn.example.com/ao-thun.jpg");
        assert_eq!(order.items[1].total, 50_000);
        assert_eq!(order.items[1].variant_text, "Màu: N/A | Size: N/A");

        assert_eq!(order.cost_summary.subtotal, 250_000);
        assert_eq!(order.cost_summary.shipping_fee, 30_000);
        assert_eq!(order.cost_summary.discount_amount, 0);
        assert_eq!(order.cost_summary.total, 280_000);

        Ok(())
    }

    #[test]
    fn every_item_total_is_price_times_quantity() -> TestResult {
        let lines = [
            line("a", 19_000, 7, Variant::default())?,
            line("b", 1, 1, Variant::default())?,
            line("c", 399_000, 3, Variant::default())?,
        ];

        let order = assemble(&lines, STANDARD_SHIPPING_FEE)?;

        for item in &order.items {
            assert_eq!(
                item.total,
                item.price * u64::from(item.quantity.get()),
                "line total for {}",
                item.name
            );
        }

        let sum: u64 = order.items.iter().map(|item| item.total).sum();

        assert_eq!(order.cost_summary.subtotal, sum);

        Ok(())
    }

    #[test]
    fn summarize_matches_assembled_summary() -> TestResult {
        let lines = [
            line("p1", 100_000, 2, Variant::default())?,
            line("p2", 50_000, 1, Variant::default())?,
        ];

        assert_eq!(
            summarize(&lines, STANDARD_SHIPPING_FEE)?,
            assemble(&lines, STANDARD_SHIPPING_FEE)?.cost_summary
        );

        Ok(())
    }

    #[test]
    fn summarize_allows_empty_cart() -> TestResult {
        let summary = summarize(&[], STANDARD_SHIPPING_FEE)?;

        assert_eq!(summary.subtotal, 0);
        assert_eq!(summary.total, STANDARD_SHIPPING_FEE);

        Ok(())
    }

    #[test]
    fn assemble_reports_overflowing_lines() -> TestResult {
        let lines = [line("huge", u64::MAX, 2, Variant::default())?];

        let result = assemble(&lines, STANDARD_SHIPPING_FEE);

        assert!(
            matches!(result, Err(AssemblyError::Pricing(PricingError::LineOverflow { .. }))),
            "expected LineOverflow, got {result:?}"
        );

        Ok(())
    }
}
