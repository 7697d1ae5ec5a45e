//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber for the whole cart system.
//! Levels come from `RUST_LOG`; module paths are hidden (`with_target(false)`) since
//! every actor log line already carries an `entity_type` field.
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Full payloads at client entry points, store reads and writes
//! RUST_LOG=debug cargo run
//!
//! # Just the store
//! RUST_LOG=levelup_core::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` each client call logs its payload once on entry:
//!
//! ```rust,ignore
//! debug!(?product, "add_product called");
//! ```
//!
//! which renders as
//!
//! ```text
//! DEBUG add_product{id=CartId(1) quantity=2 product_id=PAD}: add_product called product=Product { .. }
//! INFO  add_product{..}: Action ok entity_type="CartSession" id=cart_1
//! ```
//!
//! Call this once per process. A second call panics inside `tracing_subscriber`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
