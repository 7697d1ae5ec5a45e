//! Domain clients wrapping the generic [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod cart_client;

pub use actor_client::ActorClient;
pub use cart_client::*;
