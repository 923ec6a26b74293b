//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{
    FromRow, Postgres, Row, Transaction,
    error::DatabaseError,
    postgres::PgRow,
    query, query_as, query_scalar,
};
use uuid::Uuid;
use yori::{
    orders::{OrderItem, ShippingInfo, code::OrderCode, status::OrderStatus},
    payments::PaymentMethod,
    pricing::CostSummary,
    quantity::Quantity,
};

use crate::{
    database::try_get_amount,
    domain::{
        orders::{
            data::{IdempotencyKey, NewOrder, OrderQuery},
            records::{OrderRecord, OrderUuid},
        },
        users::records::UserUuid,
    },
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const INSERT_ORDER_ITEMS_SQL: &str = include_str!("sql/insert_order_items.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_BY_CODE_SQL: &str = include_str!("sql/get_order_by_code.sql");
const GET_ORDER_BY_IDEMPOTENCY_KEY_SQL: &str = include_str!("sql/get_order_by_idempotency_key.sql");
const LOCK_ORDER_BY_CODE_SQL: &str = include_str!("sql/lock_order_by_code.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const COUNT_ORDERS_SQL: &str = include_str!("sql/count_orders.sql");

/// Unique constraint guarding order codes.
const ORDER_CODE_CONSTRAINT: &str = "orders_order_code_key";

/// Whether an insert failed because the order code is already taken.
pub(crate) fn is_order_code_conflict(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(DatabaseError::constraint)
        .is_some_and(|constraint| constraint == ORDER_CODE_CONSTRAINT)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert an order and its lines.
    pub(crate) async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(INSERT_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(order.order_code.as_str())
            .bind(OrderStatus::default().as_str())
            .bind(&order.shipping_info.receiver_name)
            .bind(&order.shipping_info.phone)
            .bind(&order.shipping_info.email)
            .bind(&order.shipping_info.address)
            .bind(order.shipping_info.payment_method.as_str())
            .bind(&order.shipping_info.estimated_delivery)
            .bind(order.note.as_deref())
            .bind(amount_param(order.cost_summary.subtotal)?)
            .bind(amount_param(order.cost_summary.shipping_fee)?)
            .bind(amount_param(order.cost_summary.discount_amount)?)
            .bind(amount_param(order.cost_summary.total)?)
            .bind(order.idempotency_key.as_ref().map(IdempotencyKey::as_str))
            .fetch_one(&mut **tx)
            .await?;

        let capacity = order.items.len();
        let mut positions = Vec::with_capacity(capacity);
        let mut product_uuids = Vec::with_capacity(capacity);
        let mut names = Vec::with_capacity(capacity);
        let mut thumbnails = Vec::with_capacity(capacity);
        let mut variants = Vec::with_capacity(capacity);
        let mut prices = Vec::with_capacity(capacity);
        let mut quantities = Vec::with_capacity(capacity);
        let mut totals = Vec::with_capacity(capacity);

        for (position, item) in order.items.iter().enumerate() {
            positions.push(i32::try_from(position).map_err(encode_error)?);
            product_uuids.push(item.product_uuid);
            names.push(item.name.as_str());
            thumbnails.push(item.thumbnail_url.as_str());
            variants.push(item.variant_text.as_str());
            prices.push(amount_param(item.price)?);
            quantities.push(i32::from(item.quantity));
            totals.push(amount_param(item.total)?);
        }

        query(INSERT_ORDER_ITEMS_SQL)
            .bind(order.uuid.into_uuid())
            .bind(positions)
            .bind(product_uuids)
            .bind(names)
            .bind(thumbnails)
            .bind(variants)
            .bind(prices)
            .bind(quantities)
            .bind(totals)
            .execute(&mut **tx)
            .await?;

        record.items.clone_from(&order.items);

        Ok(record)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        let record = query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        self.with_items(tx, record).await
    }

    pub(crate) async fn get_order_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        code: &OrderCode,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        let record = query_as::<Postgres, OrderRecord>(GET_ORDER_BY_CODE_SQL)
            .bind(code.as_str())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        self.with_items(tx, record).await
    }

    pub(crate) async fn get_order_by_idempotency_key(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        key: &IdempotencyKey,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        let record = query_as::<Postgres, OrderRecord>(GET_ORDER_BY_IDEMPOTENCY_KEY_SQL)
            .bind(user.into_uuid())
            .bind(key.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        self.with_items(tx, record).await
    }

    /// Fetch any user's order by code and lock it for a status change.
    pub(crate) async fn lock_order_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &OrderCode,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_ORDER_BY_CODE_SQL)
            .bind(code.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        let record = query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await?;

        self.with_items(tx, Some(record))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// A page of the user's orders, newest first, with their lines.
    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        filters: &OrderQuery,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let limit = i64::from(filters.page.limit());
        let offset = i64::try_from(filters.page.offset()).map_err(encode_error)?;

        let mut orders = query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(user.into_uuid())
            .bind(filters.keyword_pattern())
            .bind(filters.status.map(OrderStatus::as_str))
            .bind(filters.created_from.map(SqlxTimestamp::from))
            .bind(filters.created_to.map(SqlxTimestamp::from))
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await?;

        self.attach_items(tx, &mut orders).await?;

        Ok(orders)
    }

    pub(crate) async fn count_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        filters: &OrderQuery,
    ) -> Result<u64, sqlx::Error> {
        let count = query_scalar::<Postgres, i64>(COUNT_ORDERS_SQL)
            .bind(user.into_uuid())
            .bind(filters.keyword_pattern())
            .bind(filters.status.map(OrderStatus::as_str))
            .bind(filters.created_from.map(SqlxTimestamp::from))
            .bind(filters.created_to.map(SqlxTimestamp::from))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }

    async fn with_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: Option<OrderRecord>,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        let Some(record) = record else {
            return Ok(None);
        };

        let mut orders = vec![record];

        self.attach_items(tx, &mut orders).await?;

        Ok(orders.pop())
    }

    async fn attach_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [OrderRecord],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let rows = query_as::<Postgres, OrderItemRow>(GET_ORDER_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut items_by_order: FxHashMap<Uuid, Vec<OrderItem>> = FxHashMap::default();

        for row in rows {
            items_by_order.entry(row.order_uuid).or_default().push(row.item);
        }

        for order in orders {
            order.items = items_by_order
                .remove(&order.uuid.into_uuid())
                .unwrap_or_default();
        }

        Ok(())
    }
}

fn amount_param(amount: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(encode_error)
}

fn encode_error(error: std::num::TryFromIntError) -> sqlx::Error {
    sqlx::Error::Encode(Box::new(error))
}

fn decode_error<E>(index: &str, error: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(error),
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let payment_method: String = row.try_get("payment_method")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            order_code: OrderCode::new(row.try_get::<String, _>("order_code")?),
            status: status
                .parse::<OrderStatus>()
                .map_err(|e| decode_error("status", e))?,
            shipping_info: ShippingInfo {
                receiver_name: row.try_get("receiver_name")?,
                phone: row.try_get("phone")?,
                email: row.try_get("email")?,
                address: row.try_get("address")?,
                payment_method: payment_method
                    .parse::<PaymentMethod>()
                    .map_err(|e| decode_error("payment_method", e))?,
                estimated_delivery: row.try_get("estimated_delivery")?,
            },
            note: row.try_get("note")?,
            items: Vec::new(),
            cost_summary: CostSummary {
                subtotal: try_get_amount(row, "subtotal")?,
                shipping_fee: try_get_amount(row, "shipping_fee")?,
                discount_amount: try_get_amount(row, "discount_amount")?,
                total: try_get_amount(row, "total")?,
            },
            idempotency_key: row.try_get("idempotency_key")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

struct OrderItemRow {
    order_uuid: Uuid,
    item: OrderItem,
}

impl<'r> FromRow<'r, PgRow> for OrderItemRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        Ok(Self {
            order_uuid: row.try_get("order_uuid")?,
            item: OrderItem {
                product_uuid: row.try_get("product_uuid")?,
                name: row.try_get("name")?,
                thumbnail_url: row.try_get("thumbnail_url")?,
                variant_text: row.try_get("variant_text")?,
                price: try_get_amount(row, "price")?,
                quantity: Quantity::try_from(quantity)
                    .map_err(|e| decode_error("quantity", e))?,
                total: try_get_amount(row, "total")?,
            },
        })
    }
}
