use crate::cart_actor::{CartAction, CartError, CartOpen, CartSession};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartId, LineId, Product};
use crate::store::LineItemStore;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
///
/// Errors raised by the cart itself come back as the same [`CartError`] the engine
/// produced, so callers can match on `StorageUnavailable` or `InvalidQuantity`.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartSession>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartSession>) -> Self {
        Self { inner }
    }

    /// Opens a cart session over `store` and returns its id.
    #[instrument(skip(self, store))]
    pub async fn open_cart(&self, store: Arc<dyn LineItemStore>) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartOpen::new(store))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product(
        &self,
        id: CartId,
        product: &Product,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        debug!(?product, "add_product called");
        self.send(
            id,
            CartAction::AddProduct {
                product: product.clone(),
                quantity,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        id: CartId,
        line_id: LineId,
        delta: i64,
    ) -> Result<Cart, CartError> {
        self.send(id, CartAction::AdjustQuantity { line_id, delta })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, id: CartId, line_id: LineId) -> Result<Cart, CartError> {
        self.send(id, CartAction::RemoveLine(line_id)).await
    }

    #[instrument(skip(self))]
    pub async fn checkout(&self, id: CartId) -> Result<Cart, CartError> {
        self.send(id, CartAction::Checkout).await
    }

    #[instrument(skip(self))]
    pub async fn read_cart(&self, id: CartId) -> Result<Cart, CartError> {
        self.send(id, CartAction::Read).await
    }

    #[instrument(skip(self))]
    pub async fn set_total_override(
        &self,
        id: CartId,
        total: Option<Decimal>,
    ) -> Result<Cart, CartError> {
        self.send(id, CartAction::SetTotalOverride(total)).await
    }

    async fn send(&self, id: CartId, action: CartAction) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => CartError::SessionNotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
