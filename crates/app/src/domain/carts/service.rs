//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;
use yori::quantity::Quantity;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartItem,
            errors::CartsServiceError,
            records::{CartItemUuid, CartRecord},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        products::repository::PgProductsRepository,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(mut cart) = self.carts_repository.get_cart(&mut tx, user).await? else {
            tx.commit().await?;

            return Ok(CartRecord::empty(user));
        };

        cart.items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.products_repository
            .get_product(&mut tx, item.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut cart = self.carts_repository.ensure_cart(&mut tx, user).await?;

        let line = self
            .items_repository
            .upsert_cart_item(&mut tx, user, &item)
            .await?;

        cart.items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        debug!(user.uuid = %user, cart_item.uuid = %line, "cart item added");

        Ok(cart)
    }

    async fn update_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        buy_count: Quantity,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository
            .lock_cart(&mut tx, user)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        let rows_affected = self
            .items_repository
            .update_buy_count(&mut tx, user, item, buy_count)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        let mut cart = self.carts_repository.touch_cart(&mut tx, user).await?;

        cart.items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(mut cart) = self.carts_repository.lock_cart(&mut tx, user).await? else {
            tx.commit().await?;

            return Ok(CartRecord::empty(user));
        };

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, user, item)
            .await?;

        if rows_affected > 0 {
            cart = self.carts_repository.touch_cart(&mut tx, user).await?;
        } else {
            debug!(user.uuid = %user, cart_item.uuid = %item, "cart item already absent");
        }

        cart.items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's cart. A user who never added anything gets an empty cart.
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Add a product to the cart, creating the cart if needed. Adding a
    /// product, colour and size that is already in the cart increases that
    /// line's quantity.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Overwrite the quantity of a line in the user's cart.
    async fn update_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        buy_count: Quantity,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove a line from the user's cart. Removing a line that is not there
    /// leaves the cart unchanged and is not an error.
    async fn remove_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<CartRecord, CartsServiceError>;
}
