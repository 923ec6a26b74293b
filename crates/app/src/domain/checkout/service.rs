//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::Acquire;
use tracing::{debug, info, warn};
use yori::{
    orders::{assembly, code::OrderCodeGenerator},
    payments::PaymentMethod,
    shipping::STANDARD_SHIPPING_FEE,
};

use crate::{
    database::Db,
    domain::{
        carts::repositories::{PgCartItemsRepository, PgCartsRepository},
        checkout::{
            data::{CheckoutSettings, PlaceOrder},
            errors::CheckoutServiceError,
            records::{CheckoutInit, DEFAULT_ADDRESS_ID, PaymentInfo, PlacedOrder, SavedAddress},
        },
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
            repository::{PgOrdersRepository, is_order_code_conflict},
        },
        users::{records::UserUuid, repository::PgUsersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    settings: CheckoutSettings,
    codes: Arc<OrderCodeGenerator>,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    orders_repository: PgOrdersRepository,
    users_repository: PgUsersRepository,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, settings: CheckoutSettings) -> Self {
        let codes = Arc::new(OrderCodeGenerator::new(settings.order_code_prefix.clone()));

        Self {
            db,
            settings,
            codes,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn init(&self, user: UserUuid) -> Result<CheckoutInit, CheckoutServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .users_repository
            .get_user(&mut tx, user)
            .await?
            .ok_or(CheckoutServiceError::UserNotFound)?;

        tx.commit().await?;

        let saved_addresses = user
            .address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(|address| SavedAddress {
                id: DEFAULT_ADDRESS_ID,
                full_name: user.full_name.clone(),
                phone: user.phone.clone(),
                email: user.email.clone(),
                address: address.to_string(),
                is_default: true,
            })
            .into_iter()
            .collect();

        Ok(CheckoutInit {
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            saved_addresses,
        })
    }

    async fn payment_info(&self, user: UserUuid) -> Result<PaymentInfo, CheckoutServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        let lines: Vec<_> = items.iter().map(|item| item.checkout_line()).collect();

        Ok(PaymentInfo {
            cost_summary: assembly::summarize(&lines, STANDARD_SHIPPING_FEE)?,
            payment_methods: PaymentMethod::descriptors(),
        })
    }

    async fn place_order(
        &self,
        user: UserUuid,
        request: PlaceOrder,
    ) -> Result<PlacedOrder, CheckoutServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(_cart) = self.carts_repository.lock_cart(&mut tx, user).await? else {
            return Err(CheckoutServiceError::EmptyCart);
        };

        if let Some(key) = &request.idempotency_key {
            if let Some(existing) = self
                .orders_repository
                .get_order_by_idempotency_key(&mut tx, user, key)
                .await?
            {
                tx.commit().await?;

                info!(
                    user.uuid = %user,
                    order.uuid = %existing.uuid,
                    order.code = %existing.order_code,
                    "replayed order for repeated idempotency key"
                );

                return Ok(placed(existing, true));
            }
        }

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;
        let lines: Vec<_> = items.iter().map(|item| item.checkout_line()).collect();
        let assembled = assembly::assemble(&lines, STANDARD_SHIPPING_FEE)?;

        let mut order = None;

        for order_code in self.codes.attempts(self.settings.order_code_attempts) {
            let new_order = NewOrder {
                uuid: OrderUuid::new(),
                user_uuid: user,
                order_code,
                shipping_info: request.details.shipping_info.clone(),
                note: request.details.note.clone(),
                items: assembled.items.clone(),
                cost_summary: assembled.cost_summary,
                idempotency_key: request.idempotency_key.clone(),
            };

            let mut savepoint = tx.begin().await?;

            match self
                .orders_repository
                .insert_order(&mut savepoint, &new_order)
                .await
            {
                Ok(inserted) => {
                    savepoint.commit().await?;
                    order = Some(inserted);
                    break;
                }
                Err(error) if is_order_code_conflict(&error) => {
                    savepoint.rollback().await?;

                    warn!(
                        user.uuid = %user,
                        order.code = %new_order.order_code,
                        "order code already taken, retrying"
                    );
                }
                Err(error) => return Err(error.into()),
            }
        }

        let order = order.ok_or(CheckoutServiceError::CodeConflict)?;

        let cleared = self.carts_repository.clear_cart(&mut tx, user).await?;

        tx.commit().await?;

        debug!(user.uuid = %user, cart.cleared_items = cleared, "cart cleared");

        info!(
            user.uuid = %user,
            order.uuid = %order.uuid,
            order.code = %order.order_code,
            order.total = order.cost_summary.total,
            "order placed"
        );

        Ok(placed(order, false))
    }
}

fn placed(order: OrderRecord, replayed: bool) -> PlacedOrder {
    PlacedOrder {
        order_uuid: order.uuid,
        order_code: order.order_code,
        replayed,
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// The user's contact details and saved addresses.
    async fn init(&self, user: UserUuid) -> Result<CheckoutInit, CheckoutServiceError>;

    /// Amounts for the cart as it is now, and the payment methods on offer.
    async fn payment_info(&self, user: UserUuid) -> Result<PaymentInfo, CheckoutServiceError>;

    /// Create an order from the cart and empty the cart, in one transaction.
    ///
    /// Prices are taken from the catalogue at this moment and copied onto the
    /// order lines.
    async fn place_order(
        &self,
        user: UserUuid,
        request: PlaceOrder,
    ) -> Result<PlacedOrder, CheckoutServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use yori::variants::Variant;

    use crate::{
        domain::{
            carts::CartsService,
            orders::{OrdersService, data::IdempotencyKey},
            products::ProductsService,
        },
        test::{
            TestContext,
            helpers::{add_item, new_product, place_order_request},
        },
    };

    use super::*;

    #[tokio::test]
    async fn place_order_prices_and_snapshots_the_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let shirt = ctx
            .products
            .create_product(new_product("ao-thun", 100_000))
            .await?;
        let socks = ctx
            .products
            .create_product(new_product("tat-co-ngan", 50_000))
            .await?;

        add_item(
            &ctx,
            shirt.uuid,
            2,
            Variant::new(Some("Đen".to_string()), Some("M".to_string())),
        )
        .await?;
        add_item(&ctx, socks.uuid, 1, Variant::default()).await?;

        let info = ctx.checkout.payment_info(ctx.user_uuid).await?;

        assert_eq!(info.cost_summary.subtotal, 250_000);
        assert_eq!(info.cost_summary.shipping_fee, 30_000);
        assert_eq!(info.cost_summary.discount_amount, 0);
        assert_eq!(info.cost_summary.total, 280_000);

        let placed = ctx
            .checkout
            .place_order(ctx.user_uuid, place_order_request())
            .await?;

        assert!(!placed.replayed);
        assert!(placed.order_code.as_str().starts_with("YORI-"), "default prefix");

        let order = ctx.orders.get_order(ctx.user_uuid, placed.order_uuid).await?;
        let totals: Vec<_> = order.items.iter().map(|item| item.total).collect();

        assert_eq!(totals, [200_000, 50_000]);
        assert_eq!(order.items[0].variant_text, "Màu: Đen | Size: M");
        assert_eq!(order.items[1].variant_text, "Màu: N/A | Size: N/A");
        assert_eq!(order.cost_summary, info.cost_summary);
        assert_eq!(order.note.as_deref(), Some("Giao giờ hành chính"));

        Ok(())
    }

    #[tokio::test]
    async fn place_order_clears_the_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("mu-len", 90_000))
            .await?;
        add_item(&ctx, product.uuid, 3, Variant::default()).await?;

        ctx.checkout
            .place_order(ctx.user_uuid, place_order_request())
            .await?;

        let cart = ctx.carts.get_cart(ctx.user_uuid).await?;

        assert!(cart.is_empty(), "cart should be empty after checkout");
        assert!(cart.created_at.is_some(), "cart row is kept");

        Ok(())
    }

    #[tokio::test]
    async fn order_keeps_price_paid_after_catalogue_changes() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("dam-maxi", 420_000))
            .await?;
        add_item(&ctx, product.uuid, 1, Variant::default()).await?;

        let placed = ctx
            .checkout
            .place_order(ctx.user_uuid, place_order_request())
            .await?;

        ctx.products.delete_product(product.uuid).await?;

        let order = ctx.orders.get_order(ctx.user_uuid, placed.order_uuid).await?;

        assert_eq!(order.items[0].price, 420_000);
        assert_eq!(order.items[0].name, product.name);

        Ok(())
    }

    #[tokio::test]
    async fn place_order_on_empty_cart_creates_no_order() -> TestResult {
        let ctx = TestContext::new().await;

        let never_used = ctx
            .checkout
            .place_order(ctx.user_uuid, place_order_request())
            .await;

        assert!(
            matches!(never_used, Err(CheckoutServiceError::EmptyCart)),
            "expected EmptyCart, got {never_used:?}"
        );

        let product = ctx
            .products
            .create_product(new_product("khan-lua", 60_000))
            .await?;
        let cart = add_item(&ctx, product.uuid, 1, Variant::default()).await?;
        ctx.carts
            .remove_item(ctx.user_uuid, cart.items[0].uuid)
            .await?;

        let emptied = ctx
            .checkout
            .place_order(ctx.user_uuid, place_order_request())
            .await;

        assert!(
            matches!(emptied, Err(CheckoutServiceError::EmptyCart)),
            "expected EmptyCart, got {emptied:?}"
        );

        let orders = ctx
            .orders
            .list_orders(ctx.user_uuid, Default::default())
            .await?;

        assert_eq!(orders.pagination.total_records, 0);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_idempotency_key_replays_the_order() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("giay-da", 900_000))
            .await?;
        add_item(&ctx, product.uuid, 1, Variant::default()).await?;

        let request = PlaceOrder {
            idempotency_key: Some(IdempotencyKey::parse("submit-7f3a")?),
            ..place_order_request()
        };

        let first = ctx
            .checkout
            .place_order(ctx.user_uuid, request.clone())
            .await?;
        let second = ctx.checkout.place_order(ctx.user_uuid, request).await?;

        assert!(!first.replayed);
        assert!(second.replayed);
        assert_eq!(first.order_uuid, second.order_uuid);
        assert_eq!(first.order_code, second.order_code);

        let orders = ctx
            .orders
            .list_orders(ctx.user_uuid, Default::default())
            .await?;

        assert_eq!(orders.pagination.total_records, 1);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_submits_create_one_order() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("tui-xach", 650_000))
            .await?;
        add_item(&ctx, product.uuid, 1, Variant::default()).await?;

        let (first, second) = tokio::join!(
            ctx.checkout.place_order(ctx.user_uuid, place_order_request()),
            ctx.checkout.place_order(ctx.user_uuid, place_order_request()),
        );

        let placed = [&first, &second].iter().filter(|result| result.is_ok()).count();
        let empty = [&first, &second]
            .iter()
            .filter(|result| matches!(result, Err(CheckoutServiceError::EmptyCart)))
            .count();

        assert_eq!(placed, 1, "exactly one submit places an order");
        assert_eq!(empty, 1, "the other finds the cart already emptied");

        let orders = ctx
            .orders
            .list_orders(ctx.user_uuid, Default::default())
            .await?;

        assert_eq!(orders.pagination.total_records, 1);

        Ok(())
    }

    #[tokio::test]
    async fn init_offers_the_profile_address() -> TestResult {
        let ctx = TestContext::new().await;

        let init = ctx.checkout.init(ctx.user_uuid).await?;

        assert_eq!(init.email, "customer@example.com");
        assert_eq!(init.saved_addresses.len(), 1);
        assert_eq!(init.saved_addresses[0].id, "default");
        assert!(init.saved_addresses[0].is_default);

        Ok(())
    }

    #[tokio::test]
    async fn init_unknown_user_returns_user_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.checkout.init(UserUuid::new()).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::UserNotFound)),
            "expected UserNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn payment_info_for_empty_cart_charges_shipping_only() -> TestResult {
        let ctx = TestContext::new().await;

        let info = ctx.checkout.payment_info(ctx.user_uuid).await?;

        assert_eq!(info.cost_summary.subtotal, 0);
        assert_eq!(info.cost_summary.total, 30_000);
        assert_eq!(
            info.payment_methods
                .iter()
                .filter(|method| method.is_enabled)
                .count(),
            3
        );

        Ok(())
    }
}
