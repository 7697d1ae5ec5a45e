//! The cart actor: reconciliation engine plus the session entity that serializes it.

pub mod actions;
pub mod engine;
pub mod entity;
pub mod error;

pub use actions::*;
pub use engine::{CartEngine, LineIdGenerator};
pub use entity::{CartOpen, CartSession};
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartSession>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = CartClient::new(generic_client);

    (actor, client)
}
