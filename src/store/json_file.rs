use crate::model::{CartLine, LineId};
use crate::store::{set_quantity_in, upsert_into, LineItemStore, StoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Line store persisted as a single JSON array on disk.
///
/// Writes go to `<path>.tmp` and are renamed over `path`, so a crash mid-write leaves
/// either the old or the new line set, never a mix. A missing file reads as an empty
/// cart. The internal lock serializes read-modify-write cycles within the process.
#[derive(Debug)]
pub struct JsonFileLineItemStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileLineItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<CartLine>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(unavailable(&self.path, &e)),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    async fn write(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(lines)
            .map_err(|e| StoreError::Corrupt(format!("encode failed: {e}")))?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| unavailable(&tmp, &e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| unavailable(&self.path, &e))?;
        debug!(path = %self.path.display(), lines = lines.len(), "Cart file written");
        Ok(())
    }

    async fn modify(&self, apply: impl FnOnce(&mut Vec<CartLine>) + Send) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut lines = self.read().await?;
        apply(&mut lines);
        self.write(&lines).await
    }
}

fn unavailable(path: &Path, e: &std::io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {e}", path.display()))
}

#[async_trait]
impl LineItemStore for JsonFileLineItemStore {
    async fn list_lines(&self) -> Result<Vec<CartLine>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn upsert_line(&self, line: CartLine) -> Result<(), StoreError> {
        self.modify(move |lines| upsert_into(lines, line)).await
    }

    async fn set_quantity(&self, id: &LineId, quantity: u32) -> Result<(), StoreError> {
        self.modify(|lines| set_quantity_in(lines, id, quantity)).await
    }

    async fn delete_line(&self, id: &LineId) -> Result<(), StoreError> {
        self.modify(|lines| lines.retain(|line| &line.id != id)).await
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write(&[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use rust_decimal::Decimal;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine::new(
            id,
            Product::new("KB", "Keyboard", Decimal::new(4990, 2)).with_discount(10),
            quantity,
        )
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileLineItemStore::new(dir.path().join("cart.json"));
        assert!(store.list_lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lines_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let store = JsonFileLineItemStore::new(&path);
        store.upsert_line(line("a", 1)).await.unwrap();
        store.upsert_line(line("b", 2)).await.unwrap();
        store.set_quantity(&LineId::from("a"), 5).await.unwrap();
        store.delete_line(&LineId::from("b")).await.unwrap();
        drop(store);

        let reopened = JsonFileLineItemStore::new(&path);
        let lines = reopened.list_lines().await.unwrap();
        assert_eq!(lines, vec![line("a", 5)]);
        assert_eq!(lines[0].product.price, Decimal::new(4990, 2));
    }

    #[tokio::test]
    async fn test_clear_all_empties_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileLineItemStore::new(dir.path().join("cart.json"));
        store.upsert_line(line("a", 1)).await.unwrap();
        store.clear_all().await.unwrap();
        assert!(store.list_lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_garbage_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, b"not json").unwrap();

        let store = JsonFileLineItemStore::new(&path);
        assert!(matches!(
            store.list_lines().await,
            Err(StoreError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_sibling_files_do_not_share_temp_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.tmp"), b"keep").unwrap();

        let json = JsonFileLineItemStore::new(dir.path().join("cart.json"));
        let yaml = JsonFileLineItemStore::new(dir.path().join("cart.yaml"));
        json.upsert_line(line("a", 1)).await.unwrap();
        yaml.upsert_line(line("b", 2)).await.unwrap();

        assert_eq!(json.list_lines().await.unwrap(), vec![line("a", 1)]);
        assert_eq!(yaml.list_lines().await.unwrap(), vec![line("b", 2)]);
        assert_eq!(std::fs::read(dir.path().join("cart.tmp")).unwrap(), b"keep");
        assert!(!dir.path().join("cart.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_unwritable_location_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileLineItemStore::new(dir.path().join("missing").join("cart.json"));
        assert!(matches!(
            store.upsert_line(line("a", 1)).await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
