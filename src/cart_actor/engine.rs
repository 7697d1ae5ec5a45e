//! # Cart Reconciliation
//!
//! [`CartEngine`] keeps a cart to at most one line per product while applying
//! additions, quantity adjustments, removals and checkout against a
//! [`LineItemStore`].
//!
//! ## Two kinds of identity
//!
//! - **Adding** merges by *product* id: adding a product already in the cart raises
//!   that line's quantity instead of creating a second line.
//! - **Adjusting and removing** target a *line* id. Passing a product id there
//!   matches nothing and is a no-op.
//!
//! ## Read-modify-write
//!
//! Every mutation lists the current lines, decides on exactly one store call, makes
//! it, and applies the same change to the listed lines to build the returned [`Cart`].
//! Once the write has succeeded nothing else can fail, so an error always means the
//! persisted lines are as they were. Mutating methods take
//! `&mut self`, so the engine owner (normally the cart actor) is the single writer.

use crate::cart_actor::CartError;
use crate::model::{Cart, CartLine, LineId, Product};
use crate::store::{set_quantity_in, upsert_into, LineItemStore};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

/// Produces a fresh line id. Must not repeat ids still present in the cart.
pub type LineIdGenerator = Box<dyn Fn() -> LineId + Send + Sync>;

pub struct CartEngine<S> {
    store: S,
    next_line_id: LineIdGenerator,
    total_override: Option<Decimal>,
}

impl<S: LineItemStore> CartEngine<S> {
    /// Creates an engine over `store`, minting line ids as random UUIDs.
    pub fn new(store: S) -> Self {
        Self::with_id_generator(store, || LineId(Uuid::new_v4().to_string()))
    }

    pub fn with_id_generator(
        store: S,
        next_line_id: impl Fn() -> LineId + Send + Sync + 'static,
    ) -> Self {
        Self {
            store,
            next_line_id: Box::new(next_line_id),
            total_override: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuilds the cart from the persisted lines.
    pub async fn read_cart(&self) -> Result<Cart, CartError> {
        let lines = self.store.list_lines().await?;
        Ok(self.project(lines))
    }

    /// Adds `quantity` units of `product`, merging into the existing line for the same
    /// product id if there is one.
    ///
    /// `product` becomes the line's snapshot only when a new line is created; a merge
    /// keeps the snapshot already stored.
    ///
    /// # Errors
    /// [`CartError::InvalidQuantity`] for a zero quantity, checked before the store is
    /// touched. [`CartError::StorageUnavailable`] if the store fails.
    pub async fn add_product(&mut self, product: Product, quantity: u32) -> Result<Cart, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let mut lines = self.store.list_lines().await?;
        let existing = lines
            .iter()
            .find(|line| line.product.id == product.id)
            .map(|line| (line.id.clone(), line.quantity));
        match existing {
            Some((id, current)) => {
                let merged = current.saturating_add(quantity);
                debug!(line_id = %id, product_id = %product.id, merged, "Merging into existing line");
                self.store.set_quantity(&id, merged).await?;
                set_quantity_in(&mut lines, &id, merged);
            }
            None => {
                let line = CartLine::new((self.next_line_id)(), product, quantity);
                debug!(line_id = %line.id, product_id = %line.product.id, quantity, "Adding new line");
                self.store.upsert_line(line.clone()).await?;
                upsert_into(&mut lines, line);
            }
        }

        Ok(self.project(lines))
    }

    /// Changes the quantity of line `line_id` by `delta`.
    ///
    /// A result at or below zero removes the line. An unknown line id, or a zero
    /// delta, leaves the cart unchanged.
    pub async fn adjust_quantity(&mut self, line_id: &LineId, delta: i64) -> Result<Cart, CartError> {
        let mut lines = self.store.list_lines().await?;
        let current = lines
            .iter()
            .find(|line| &line.id == line_id)
            .map(|line| line.quantity);
        let Some(current) = current else {
            debug!(%line_id, "Adjust on unknown line ignored");
            return Ok(self.project(lines));
        };
        if delta == 0 {
            return Ok(self.project(lines));
        }

        let updated = i64::from(current).saturating_add(delta);
        if updated <= 0 {
            debug!(%line_id, "Quantity reached zero, removing line");
            self.store.delete_line(line_id).await?;
            lines.retain(|line| &line.id != line_id);
        } else {
            let quantity = u32::try_from(updated).unwrap_or(u32::MAX);
            self.store.set_quantity(line_id, quantity).await?;
            set_quantity_in(&mut lines, line_id, quantity);
        }

        Ok(self.project(lines))
    }

    /// Deletes line `line_id` if present.
    pub async fn remove_line(&mut self, line_id: &LineId) -> Result<Cart, CartError> {
        let mut lines = self.store.list_lines().await?;
        if !lines.iter().any(|line| &line.id == line_id) {
            return Ok(self.project(lines));
        }
        self.store.delete_line(line_id).await?;
        lines.retain(|line| &line.id != line_id);
        Ok(self.project(lines))
    }

    /// Clears every line. No order or payment is recorded.
    pub async fn checkout(&mut self) -> Result<Cart, CartError> {
        self.store.clear_all().await?;
        self.total_override = None;
        Ok(self.project(Vec::new()))
    }

    /// Records the total quoted by the remote gateway, or clears it with `None`.
    pub fn set_total_override(&mut self, total: Option<Decimal>) {
        self.total_override = total;
    }

    fn project(&self, lines: Vec<CartLine>) -> Cart {
        Cart::new(lines, self.total_override)
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for CartEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartEngine")
            .field("store", &self.store)
            .field("total_override", &self.total_override)
            .finish_non_exhaustive()
    }
}
