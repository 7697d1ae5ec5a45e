use crate::cart_actor::{self, CartError};
use crate::clients::CartClient;
use crate::config::{AppConfig, ConfigError};
use crate::model::CartId;
use crate::rewards::TierTable;
use crate::store::{JsonFileLineItemStore, LineItemStore, MemoryLineItemStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running cart system: one cart actor, the store it reconciles against, and the
/// tier table used for rewards.
pub struct CartSystem {
    pub cart_client: CartClient,
    pub tiers: TierTable,
    store: Arc<dyn LineItemStore>,
    handles: Vec<JoinHandle<()>>,
}

impl CartSystem {
    /// Builds the system described by `config`.
    ///
    /// Lines go to the JSON file at `store_path` when one is set, otherwise to memory.
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Any [`ConfigError`] from [`AppConfig::validate`], before anything is spawned.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let store: Arc<dyn LineItemStore> = match &config.store_path {
            Some(path) => Arc::new(JsonFileLineItemStore::new(path.clone())),
            None => Arc::new(MemoryLineItemStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Like [`new`](Self::new), reconciling against `store` instead of the configured one.
    pub fn with_store(
        config: &AppConfig,
        store: Arc<dyn LineItemStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let tiers = config.tier_table()?;

        let (cart_actor, cart_client) = cart_actor::new(config.actor_buffer);
        let cart_handle = tokio::spawn(cart_actor.run(()));

        info!(
            buffer = config.actor_buffer,
            persistent = config.store_path.is_some(),
            tiers = tiers.tiers().len(),
            "Cart system started"
        );

        Ok(Self {
            cart_client,
            tiers,
            store,
            handles: vec![cart_handle],
        })
    }

    /// Opens a cart session over the system's store.
    pub async fn open_cart(&self) -> Result<CartId, CartError> {
        self.cart_client.open_cart(Arc::clone(&self.store)).await
    }

    pub fn store(&self) -> &Arc<dyn LineItemStore> {
        &self.store
    }

    /// Drops the system's client and waits for the actor to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
