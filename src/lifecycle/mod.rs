//! # System Lifecycle
//!
//! Starting, wiring and stopping the cart system.
//!
//! [`CartSystem`] reads an [`AppConfig`](crate::config::AppConfig), picks the line-item
//! store it names, spawns the cart actor and keeps its join handle. Dropping every
//! [`CartClient`](crate::clients::CartClient) closes the actor's channel;
//! [`CartSystem::shutdown`] does that for the clients it owns and then waits for the
//! actor task to drain.
//!
//! ```rust,ignore
//! let system = CartSystem::new(&AppConfig::default())?;
//! let cart = system.open_cart().await?;
//! system.cart_client.add_product(cart, &product, 1).await?;
//! system.shutdown().await?;
//! ```
//!
//! Clones of `cart_client` handed out elsewhere keep the actor alive, so drop them
//! before calling `shutdown`.

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use tracing::*;
