//! Test Helpers

use uuid::Uuid;
use yori::{
    checkout::{PlaceOrderDetails, RawPlaceOrder},
    orders::{OrderItem, code::OrderCode},
    pricing::CostSummary,
    quantity::{Quantity, QuantityError},
    variants::Variant,
};

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::NewCartItem,
            records::{CartItemUuid, CartRecord},
        },
        checkout::data::PlaceOrder,
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
        products::{data::NewProduct, records::ProductUuid},
        users::{data::NewUser, records::UserUuid},
    },
    test::TestContext,
};

pub(crate) fn quantity(value: u32) -> Result<Quantity, QuantityError> {
    Quantity::new(value)
}

pub(crate) fn new_product(slug: &str, price: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: format!("Sản phẩm {slug}"),
        slug: slug.to_string(),
        image_url: format!("https://cdn.example.com/{slug}.jpg"),
        price,
    }
}

pub(crate) fn new_user(email: &str) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        full_name: "Trần Văn Minh".to_string(),
        email: email.to_string(),
        phone: None,
        address: None,
    }
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    product: ProductUuid,
    buy_count: u32,
    variant: Variant,
) -> Result<CartRecord, CartsServiceError> {
    ctx.carts
        .add_item(
            ctx.user_uuid,
            NewCartItem {
                uuid: CartItemUuid::new(),
                product_uuid: product,
                buy_count: quantity(buy_count).expect("buy count should be positive"),
                variant,
            },
        )
        .await
}

/// A valid cash-on-delivery request without an idempotency key.
pub(crate) fn place_order_request() -> PlaceOrder {
    let details = PlaceOrderDetails::parse(RawPlaceOrder {
        payment_method: Some("cod".to_string()),
        shipping_address: Some("12 Lê Lợi, Quận 1, TP.HCM".to_string()),
        receiver_name: Some("Nguyễn Thị Lan".to_string()),
        phone: Some("0901234567".to_string()),
        email: Some("lan@example.com".to_string()),
        note: Some("  Giao giờ hành chính  ".to_string()),
        billing_address_same_as_shipping: None,
    })
    .expect("place order details should be valid");

    PlaceOrder {
        details,
        idempotency_key: None,
    }
}

/// Store a two line order with a chosen code, bypassing the cart.
pub(crate) async fn insert_order(
    ctx: &TestContext,
    user: UserUuid,
    code: &str,
) -> Result<OrderRecord, sqlx::Error> {
    let items = vec![
        OrderItem {
            product_uuid: Uuid::now_v7(),
            name: "Áo sơ mi lụa".to_string(),
            thumbnail_url: "https://cdn.example.com/ao-so-mi.jpg".to_string(),
            variant_text: Variant::new(Some("Trắng".to_string()), Some("S".to_string())).text(),
            price: 100_000,
            quantity: quantity(2).expect("two is positive"),
            total: 200_000,
        },
        OrderItem {
            product_uuid: Uuid::now_v7(),
            name: "Tất cổ ngắn".to_string(),
            thumbnail_url: String::new(),
            variant_text: Variant::default().text(),
            price: 50_000,
            quantity: quantity(1).expect("one is positive"),
            total: 50_000,
        },
    ];

    let order = NewOrder {
        uuid: OrderUuid::new(),
        user_uuid: user,
        order_code: OrderCode::new(code),
        shipping_info: place_order_request().details.shipping_info,
        note: None,
        items,
        cost_summary: CostSummary {
            subtotal: 250_000,
            shipping_fee: 30_000,
            discount_amount: 0,
            total: 280_000,
        },
        idempotency_key: None,
    };

    let mut tx = ctx.db.pool().begin().await?;

    let record = PgOrdersRepository::new().insert_order(&mut tx, &order).await?;

    tx.commit().await?;

    Ok(record)
}
