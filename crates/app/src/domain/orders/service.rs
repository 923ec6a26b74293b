//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use yori::{
    orders::{code::OrderCode, status::OrderStatus},
    pagination::Pagination,
};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::{OrderLookup, OrderQuery, OrdersPage},
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .repository
            .get_order(&mut tx, user, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(order)
    }

    async fn find_order(
        &self,
        user: UserUuid,
        lookup: &OrderLookup,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = match lookup {
            OrderLookup::Uuid(uuid) => self.repository.get_order(&mut tx, user, *uuid).await?,
            OrderLookup::Code(code) => {
                self.repository
                    .get_order_by_code(&mut tx, user, code)
                    .await?
            }
        }
        .ok_or(OrdersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(
        &self,
        user: UserUuid,
        query: OrderQuery,
    ) -> Result<OrdersPage, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let total_records = self.repository.count_orders(&mut tx, user, &query).await?;
        let orders = self.repository.list_orders(&mut tx, user, &query).await?;

        tx.commit().await?;

        Ok(OrdersPage {
            orders,
            pagination: Pagination::new(query.page, total_records),
        })
    }

    async fn update_status(
        &self,
        code: &OrderCode,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .repository
            .lock_order_by_code(&mut tx, code)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let previous = order.status;
        let next = previous.transition_to(status)?;

        let updated = self.repository.update_status(&mut tx, order.uuid, next).await?;

        tx.commit().await?;

        info!(
            order.uuid = %updated.uuid,
            order.code = %updated.order_code,
            from = %previous,
            to = %next,
            "order status updated"
        );

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// One of the user's orders by id.
    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// One of the user's orders by id or by order code.
    async fn find_order(
        &self,
        user: UserUuid,
        lookup: &OrderLookup,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// A filtered page of the user's orders, newest first.
    async fn list_orders(
        &self,
        user: UserUuid,
        query: OrderQuery,
    ) -> Result<OrdersPage, OrdersServiceError>;

    /// Move any user's order to `status` if the lifecycle allows it.
    async fn update_status(
        &self,
        code: &OrderCode,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
