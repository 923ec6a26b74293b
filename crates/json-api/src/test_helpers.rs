//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;
use yori::{
    orders::{OrderItem, ShippingInfo, code::OrderCode, status::OrderStatus},
    payments::PaymentMethod,
    pricing::CostSummary,
    quantity::Quantity,
    variants::Variant,
};
use yori_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartItemUuid, CartRecord},
        },
        checkout::MockCheckoutService,
        orders::{
            MockOrdersService,
            records::{OrderRecord, OrderUuid},
        },
        products::{MockProductsService, records::ProductUuid},
        users::{MockUsersService, records::UserUuid},
    },
};

use crate::{extensions::*, router, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Mocks for every service; any call without an expectation fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) orders: MockOrdersService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            users: Arc::new(MockUsersService::new()),
            products: Arc::new(MockProductsService::new()),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            checkout: Arc::new(self.checkout),
            auth: Arc::new(self.auth),
        })
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}

/// Serve `route` as the test user.
pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    router::service(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        Mocks {
            carts,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    service(
        Mocks {
            checkout,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(
        Mocks {
            orders,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn quantity(value: u32) -> Quantity {
    Quantity::new(value).expect("test quantities are positive")
}

pub(crate) fn make_cart_item(uuid: CartItemUuid, price: u64, buy_count: u32) -> CartItemRecord {
    CartItemRecord {
        uuid,
        product_uuid: ProductUuid::from_uuid(Uuid::nil()),
        buy_count: quantity(buy_count),
        variant: Variant::new(Some("Đen".to_string()), Some("M".to_string())),
        product_name: "Áo thun basic".to_string(),
        product_image: "https://cdn.example.com/ao-thun.jpg".to_string(),
        price,
        slug: "ao-thun-basic".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(items: Vec<CartItemRecord>) -> CartRecord {
    CartRecord {
        user_uuid: TEST_USER_UUID,
        items,
        created_at: Some(Timestamp::UNIX_EPOCH),
        updated_at: Some(Timestamp::UNIX_EPOCH),
    }
}

/// An order of two shirts and a cap: 250.000đ of goods plus shipping.
pub(crate) fn make_order(uuid: OrderUuid, code: &str, status: OrderStatus) -> OrderRecord {
    // 2024-03-05T03:30:00Z is 10:30 on 05/03/2024 in Vietnam.
    let created_at = Timestamp::from_second(1_709_609_400).expect("valid timestamp");

    OrderRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        order_code: OrderCode::new(code),
        status,
        shipping_info: ShippingInfo {
            receiver_name: "Nguyễn Thị Lan".to_string(),
            phone: "0901234567".to_string(),
            email: "lan@example.com".to_string(),
            address: "12 Lê Lợi, Quận 1, TP.HCM".to_string(),
            payment_method: PaymentMethod::Cod,
            estimated_delivery: "3-5 ngày".to_string(),
        },
        note: None,
        items: vec![
            OrderItem {
                product_uuid: Uuid::nil(),
                name: "Áo thun basic".to_string(),
                thumbnail_url: "https://cdn.example.com/ao-thun.jpg".to_string(),
                variant_text: "Màu: Đen | Size: M".to_string(),
                price: 100_000,
                quantity: quantity(2),
                total: 200_000,
            },
            OrderItem {
                product_uuid: Uuid::nil(),
                name: "Mũ lưỡi trai".to_string(),
                thumbnail_url: "https://cdn.example.com/mu.jpg".to_string(),
                variant_text: "Màu: N/A | Size: N/A".to_string(),
                price: 50_000,
                quantity: quantity(1),
                total: 50_000,
            },
        ],
        cost_summary: CostSummary {
            subtotal: 250_000,
            shipping_fee: 30_000,
            discount_amount: 0,
            total: 280_000,
        },
        idempotency_key: None,
        created_at,
        updated_at: created_at,
    }
}
