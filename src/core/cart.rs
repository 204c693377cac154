use crate::adapters::notify::TracingNotifier;
use crate::core::listing::CartSummary;
use crate::core::{Cart, CatalogSource, Notifier, ProductId, StockLevel, Storage};
use crate::domain::error::{CartError, CartOperation};

type CartResult<T> = std::result::Result<T, CartError>;

/// Owns the session's cart and keeps it in sync with the persisted snapshot.
///
/// Every mutation works on a copy of the cart; the copy is written to storage
/// first and only then becomes the in-memory cart, so a failed operation leaves
/// both untouched. Failures are returned to the caller and also reported once
/// through the [`Notifier`].
pub struct CartManager<C: CatalogSource, S: Storage> {
    catalog: C,
    storage: S,
    cart_key: String,
    cart: Cart,
    notifier: Box<dyn Notifier>,
}

impl<C: CatalogSource, S: Storage> CartManager<C, S> {
    /// Restores the cart from `cart_key`. Missing, unreadable or malformed
    /// snapshots start an empty cart.
    pub async fn load(catalog: C, storage: S, cart_key: impl Into<String>) -> Self {
        let cart_key = cart_key.into();

        let cart = match storage.read_item(&cart_key).await {
            Ok(Some(data)) => match Cart::from_json(&data) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!("Ignoring malformed cart snapshot '{}': {}", cart_key, e);
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("Could not read cart snapshot '{}': {}", cart_key, e);
                Cart::new()
            }
        };

        tracing::debug!("Loaded cart with {} line(s)", cart.len());

        Self {
            catalog,
            storage,
            cart_key,
            cart,
            notifier: Box::new(TracingNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(&self.cart)
    }

    pub async fn add_product(&mut self, product_id: ProductId) -> CartResult<()> {
        let result = self.try_add_product(product_id).await;
        self.report(CartOperation::Add, product_id, result)
    }

    pub async fn remove_product(&mut self, product_id: ProductId) -> CartResult<()> {
        let result = self.try_remove_product(product_id).await;
        self.report(CartOperation::Remove, product_id, result)
    }

    /// Sets the amount of a line already in the cart. Amounts <= 0 are ignored.
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> CartResult<()> {
        let result = self.try_update_product_amount(product_id, amount).await;
        self.report(CartOperation::UpdateAmount, product_id, result)
    }

    /// Same as `update_product_amount(id, current + 1)`.
    pub async fn increment_product(&mut self, product_id: ProductId) -> CartResult<()> {
        let result = match self.cart.amount_of(product_id) {
            Some(current) => {
                self.try_update_product_amount(product_id, i64::from(current) + 1)
                    .await
            }
            None => Err(CartError::ProductNotInCart(product_id)),
        };
        self.report(CartOperation::UpdateAmount, product_id, result)
    }

    /// Same as `update_product_amount(id, current - 1)`; a line at 1 stays at 1.
    pub async fn decrement_product(&mut self, product_id: ProductId) -> CartResult<()> {
        let result = match self.cart.amount_of(product_id) {
            Some(current) => {
                self.try_update_product_amount(product_id, i64::from(current) - 1)
                    .await
            }
            None => Err(CartError::ProductNotInCart(product_id)),
        };
        self.report(CartOperation::UpdateAmount, product_id, result)
    }

    async fn try_add_product(&mut self, product_id: ProductId) -> CartResult<()> {
        let mut updated = self.cart.clone();

        let current = updated.amount_of(product_id);
        let requested = u64::from(current.unwrap_or(0)) + 1;

        let stock = self.fetch_stock(product_id).await?;
        if requested > u64::from(stock.amount) {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        match current {
            Some(_) => {
                // requested <= stock.amount, so it fits in u32
                updated.set_amount(product_id, requested as u32);
            }
            None => {
                let product = self
                    .catalog
                    .get_product(product_id)
                    .await
                    .map_err(|e| CartError::fetch(product_id, &e))?;

                if product.id != product_id {
                    return Err(CartError::FetchFailure {
                        product_id,
                        reason: format!("API returned product {}", product.id),
                    });
                }
                product
                    .validate()
                    .map_err(|reason| CartError::FetchFailure { product_id, reason })?;
                updated.push_new(product);
            }
        }

        self.commit(updated).await?;
        tracing::info!("Added product {} (amount {})", product_id, requested);
        Ok(())
    }

    async fn try_remove_product(&mut self, product_id: ProductId) -> CartResult<()> {
        let mut updated = self.cart.clone();
        updated
            .remove(product_id)
            .ok_or(CartError::ProductNotInCart(product_id))?;

        self.commit(updated).await?;
        tracing::info!("Removed product {}", product_id);
        Ok(())
    }

    async fn try_update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> CartResult<()> {
        if amount <= 0 {
            tracing::debug!("Ignoring amount {} for product {}", amount, product_id);
            return Ok(());
        }
        let requested = amount as u64;

        let stock = self.fetch_stock(product_id).await?;
        if requested > u64::from(stock.amount) {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut updated = self.cart.clone();
        if !updated.set_amount(product_id, requested as u32) {
            return Err(CartError::ProductNotInCart(product_id));
        }

        self.commit(updated).await?;
        tracing::info!("Set product {} amount to {}", product_id, requested);
        Ok(())
    }

    async fn fetch_stock(&self, product_id: ProductId) -> CartResult<StockLevel> {
        self.catalog
            .get_stock(product_id)
            .await
            .map_err(|e| CartError::fetch(product_id, &e))
    }

    async fn commit(&mut self, updated: Cart) -> CartResult<()> {
        let snapshot = updated.to_json().map_err(CartError::persist)?;
        self.storage
            .write_item(&self.cart_key, &snapshot)
            .await
            .map_err(CartError::persist)?;

        self.cart = updated;
        Ok(())
    }

    fn report(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        result: CartResult<()>,
    ) -> CartResult<()> {
        if let Err(e) = &result {
            tracing::warn!("{:?} of product {} failed: {}", operation, product_id, e);
            self.notifier.error(e.user_friendly_message(operation));
        }
        result
    }
}
