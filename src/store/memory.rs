use crate::model::{CartLine, LineId};
use crate::store::{set_quantity_in, upsert_into, LineItemStore, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Process-local line store.
///
/// `set_available(false)` makes every call fail with [`StoreError::Unavailable`]
/// without touching the lines, which is how tests exercise storage outages.
#[derive(Debug)]
pub struct MemoryLineItemStore {
    lines: Mutex<Vec<CartLine>>,
    available: AtomicBool,
}

impl MemoryLineItemStore {
    pub fn new() -> Self {
        Self::with_lines(Vec::new())
    }

    pub fn with_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: Mutex::new(lines),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store switched off".to_string()))
        }
    }
}

impl Default for MemoryLineItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineItemStore for MemoryLineItemStore {
    async fn list_lines(&self) -> Result<Vec<CartLine>, StoreError> {
        self.check()?;
        Ok(self.lines.lock().await.clone())
    }

    async fn upsert_line(&self, line: CartLine) -> Result<(), StoreError> {
        self.check()?;
        upsert_into(&mut *self.lines.lock().await, line);
        Ok(())
    }

    async fn set_quantity(&self, id: &LineId, quantity: u32) -> Result<(), StoreError> {
        self.check()?;
        set_quantity_in(&mut self.lines.lock().await, id, quantity);
        Ok(())
    }

    async fn delete_line(&self, id: &LineId) -> Result<(), StoreError> {
        self.check()?;
        self.lines.lock().await.retain(|line| &line.id != id);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        self.check()?;
        self.lines.lock().await.clear();
        Ok(())
    }
}
