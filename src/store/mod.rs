//! The line-item store: where cart lines actually live.
//!
//! The cart engine treats a [`LineItemStore`] as the only source of truth. Two
//! implementations ship with the crate:
//!
//! - [`MemoryLineItemStore`] - process-local, with a switch for simulating outages.
//! - [`JsonFileLineItemStore`] - one JSON file, replaced atomically on every write.

pub mod error;
pub mod json_file;
pub mod memory;

pub use error::*;
pub use json_file::JsonFileLineItemStore;
pub use memory::MemoryLineItemStore;

use crate::model::{CartLine, LineId};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Persistence contract for one cart's lines.
///
/// Each call is atomic on its own: it either applies fully or returns an error and
/// leaves the stored lines as they were. Setting the quantity of, or deleting, a line
/// that does not exist succeeds without effect.
#[async_trait]
pub trait LineItemStore: Debug + Send + Sync {
    /// All lines in stable insertion order.
    async fn list_lines(&self) -> Result<Vec<CartLine>, StoreError>;

    /// Inserts `line`, or replaces the line with the same id in place.
    async fn upsert_line(&self, line: CartLine) -> Result<(), StoreError>;

    async fn set_quantity(&self, id: &LineId, quantity: u32) -> Result<(), StoreError>;

    async fn delete_line(&self, id: &LineId) -> Result<(), StoreError>;

    async fn clear_all(&self) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: LineItemStore + ?Sized> LineItemStore for Arc<S> {
    async fn list_lines(&self) -> Result<Vec<CartLine>, StoreError> {
        (**self).list_lines().await
    }

    async fn upsert_line(&self, line: CartLine) -> Result<(), StoreError> {
        (**self).upsert_line(line).await
    }

    async fn set_quantity(&self, id: &LineId, quantity: u32) -> Result<(), StoreError> {
        (**self).set_quantity(id, quantity).await
    }

    async fn delete_line(&self, id: &LineId) -> Result<(), StoreError> {
        (**self).delete_line(id).await
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        (**self).clear_all().await
    }
}

/// Applies an upsert to an in-memory line set. Shared by the implementations.
pub(crate) fn upsert_into(lines: &mut Vec<CartLine>, line: CartLine) {
    match lines.iter_mut().find(|existing| existing.id == line.id) {
        Some(existing) => *existing = line,
        None => lines.push(line),
    }
}

/// Applies a quantity change to an in-memory line set. Missing ids are ignored.
pub(crate) fn set_quantity_in(lines: &mut [CartLine], id: &LineId, quantity: u32) {
    if let Some(line) = lines.iter_mut().find(|line| &line.id == id) {
        line.quantity = quantity;
    }
}
