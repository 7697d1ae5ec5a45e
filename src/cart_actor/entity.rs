use crate::cart_actor::{CartAction, CartEngine, CartError};
use crate::framework::ActorEntity;
use crate::model::{Cart, CartId};
use crate::store::LineItemStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// An open cart, hosted by the cart actor.
///
/// The actor drains one request at a time, so each session's engine is only ever
/// driven by one operation at once.
#[derive(Debug)]
pub struct CartSession {
    pub id: CartId,
    engine: CartEngine<Arc<dyn LineItemStore>>,
}

/// Payload for opening a cart session over a store.
#[derive(Debug, Clone)]
pub struct CartOpen {
    pub store: Arc<dyn LineItemStore>,
}

impl CartOpen {
    pub fn new(store: Arc<dyn LineItemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActorEntity for CartSession {
    type Id = CartId;
    type Create = CartOpen;
    type Action = CartAction;
    type ActionResult = Cart;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartOpen) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            engine: CartEngine::new(params.store),
        })
    }

    /// Reads the store once; an unreachable store fails the open.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        let cart = self.engine.read_cart().await?;
        info!(cart_id = %self.id, lines = cart.lines.len(), "Cart restored");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<Cart, Self::Error> {
        match action {
            CartAction::AddProduct { product, quantity } => {
                self.engine.add_product(product, quantity).await
            }
            CartAction::AdjustQuantity { line_id, delta } => {
                self.engine.adjust_quantity(&line_id, delta).await
            }
            CartAction::RemoveLine(line_id) => self.engine.remove_line(&line_id).await,
            CartAction::Checkout => self.engine.checkout().await,
            CartAction::Read => self.engine.read_cart().await,
            CartAction::SetTotalOverride(total) => {
                self.engine.set_total_override(total);
                self.engine.read_cart().await
            }
        }
    }
}
