//! # Level-Up Core
//!
//! > **Cart reconciliation and rewards progression for the Level-Up storefront.**
//!
//! Two independent pieces live here:
//!
//! - A **cart reconciliation engine** that keeps a shopping cart consistent with a
//!   persistent line-item store. Every mutation goes to the store first and the cart
//!   the caller sees reflects exactly what was stored.
//! - A **rewards calculator** that maps a points balance onto an ordered tier table.
//!
//! ## 🏗️ Design
//!
//! ### The store is the truth
//! The engine keeps no cart between calls. Each operation lists the stored lines, issues
//! exactly one store write, and applies that same change to the listed lines for its
//! answer. A failed write leaves the cart exactly as it was; a successful one is always
//! reported as success.
//!
//! ### One actor per cart system
//! Carts run inside a generic `ResourceActor<T>` (see [`framework`]). The actor processes
//! requests one at a time, so two adjustments racing on the same line are applied in
//! arrival order and neither is lost.
//!
//! ### Typed errors end to end
//! Engine failures are [`CartError`](cart_actor::CartError) values. They cross the actor
//! boundary boxed and come back out of [`CartClient`](clients::CartClient) as the same
//! variant, so callers can match on `StorageUnavailable` or `InvalidQuantity`.
//!
//! ### Observability
//! Everything logs through `tracing`; see [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the generic actor, its client and mocks for testing clients.
//! - [`model`]: products, cart lines, carts and tiers.
//! - [`store`]: the [`LineItemStore`](store::LineItemStore) contract with in-memory and
//!   JSON-file backends.
//! - [`cart_actor`]: the [`CartEngine`](cart_actor::CartEngine) and the session entity
//!   that runs it inside the actor.
//! - [`clients`]: [`CartClient`](clients::CartClient), the typed front door to the actor.
//! - [`rewards`]: [`TierTable`](rewards::TierTable) and level status.
//! - [`config`]: YAML configuration.
//! - [`lifecycle`]: [`CartSystem`](lifecycle::CartSystem) startup and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Point it at a config file
//! LEVELUP_CONFIG=levelup.yml RUST_LOG=debug cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod rewards;
pub mod store;
