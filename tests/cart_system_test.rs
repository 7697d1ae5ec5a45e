use levelup_core::cart_actor::CartError;
use levelup_core::clients::actor_client::ActorClient;
use levelup_core::config::{AppConfig, ConfigError};
use levelup_core::lifecycle::CartSystem;
use levelup_core::model::{CartId, Product};
use levelup_core::store::{LineItemStore, MemoryLineItemStore, StoreError};
use rust_decimal::Decimal;
use std::sync::Arc;

fn pad() -> Product {
    Product::new("PAD-01", "Wireless Gamepad", Decimal::from(1000))
}

fn headset() -> Product {
    Product::new("HS-07", "Surround Headset", Decimal::from(2500)).with_discount(20)
}

/// Full end-to-end flow through the real actor and an in-memory store.
#[tokio::test]
async fn test_full_cart_flow() {
    let system = CartSystem::new(&AppConfig::default()).expect("Failed to start system");
    let cart_id = system.open_cart().await.expect("Failed to open cart");
    let client = &system.cart_client;

    let cart = client.add_product(cart_id, &pad(), 2).await.unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.subtotal(), Decimal::from(2000));

    let cart = client.add_product(cart_id, &headset(), 1).await.unwrap();
    assert_eq!(cart.lines.len(), 2);
    // 2 x 1000 + 1 x 2500 at 20% off
    assert_eq!(cart.total(), Decimal::from(4000));

    // Repeat add merges into the existing line
    let cart = client.add_product(cart_id, &pad(), 3).await.unwrap();
    assert_eq!(cart.lines.len(), 2);
    assert_eq!(cart.line_for_product(&pad().id).unwrap().quantity, 5);

    let headset_line = cart.line_for_product(&headset().id).unwrap().id.clone();
    let cart = client
        .adjust_quantity(cart_id, headset_line.clone(), 2)
        .await
        .unwrap();
    assert_eq!(cart.line(&headset_line).unwrap().quantity, 3);

    let cart = client
        .adjust_quantity(cart_id, headset_line.clone(), -3)
        .await
        .unwrap();
    assert!(cart.line(&headset_line).is_none());
    assert_eq!(cart.total_units(), 5);

    let cart = client
        .set_total_override(cart_id, Some(Decimal::from(4500)))
        .await
        .unwrap();
    assert_eq!(cart.total(), Decimal::from(4500));
    assert_eq!(cart.subtotal(), Decimal::from(5000));

    let cart = client.checkout(cart_id).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_override, None);
    assert!(system.store().list_lines().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_zero_quantity_is_rejected_without_touching_store() {
    let store = Arc::new(MemoryLineItemStore::new());
    let system = CartSystem::with_store(&AppConfig::default(), store.clone()).unwrap();
    let cart_id = system.open_cart().await.unwrap();

    let err = system
        .cart_client
        .add_product(cart_id, &pad(), 0)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::InvalidQuantity(0));
    assert!(store.list_lines().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_storage_outage_leaves_cart_unchanged() {
    let store = Arc::new(MemoryLineItemStore::new());
    let system = CartSystem::with_store(&AppConfig::default(), store.clone()).unwrap();
    let cart_id = system.open_cart().await.unwrap();
    let client = &system.cart_client;

    let before = client.add_product(cart_id, &pad(), 1).await.unwrap();
    let line_id = before.lines[0].id.clone();

    store.set_available(false);
    let err = client.add_product(cart_id, &headset(), 1).await.unwrap_err();
    assert!(matches!(
        err,
        CartError::StorageUnavailable(StoreError::Unavailable(_))
    ));
    let err = client
        .adjust_quantity(cart_id, line_id.clone(), 4)
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::StorageUnavailable(_)));
    assert!(client.checkout(cart_id).await.is_err());

    store.set_available(true);
    let after = client.read_cart(cart_id).await.unwrap();
    assert_eq!(after, before);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_line_adjust_is_a_noop() {
    let system = CartSystem::new(&AppConfig::default()).unwrap();
    let cart_id = system.open_cart().await.unwrap();
    let client = &system.cart_client;

    let before = client.add_product(cart_id, &pad(), 2).await.unwrap();
    let after = client
        .adjust_quantity(cart_id, "no-such-line".into(), -1)
        .await
        .unwrap();
    assert_eq!(after, before);

    let after = client
        .remove_line(cart_id, "no-such-line".into())
        .await
        .unwrap();
    assert_eq!(after, before);

    system.shutdown().await.unwrap();
}

/// Adjustments racing on one line are applied one after another; none is lost.
#[tokio::test]
async fn test_concurrent_adjustments_are_serialized() {
    let system = CartSystem::new(&AppConfig::default()).unwrap();
    let cart_id = system.open_cart().await.unwrap();

    let cart = system
        .cart_client
        .add_product(cart_id, &pad(), 20)
        .await
        .unwrap();
    let line_id = cart.lines[0].id.clone();

    let mut handles = Vec::new();
    for i in 0..40 {
        let client = system.cart_client.clone();
        let line_id = line_id.clone();
        let delta = if i % 4 == 0 { -1 } else { 2 };
        handles.push(tokio::spawn(async move {
            client.adjust_quantity(cart_id, line_id, delta).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 20 + 30 x 2 - 10 x 1
    let cart = system.cart_client.read_cart(cart_id).await.unwrap();
    assert_eq!(cart.line(&line_id).unwrap().quantity, 70);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_closed_session_is_not_found() {
    let system = CartSystem::new(&AppConfig::default()).unwrap();
    let cart_id = system.open_cart().await.unwrap();
    assert_eq!(cart_id, CartId(1));

    system.cart_client.delete(cart_id).await.unwrap();

    let err = system.cart_client.read_cart(cart_id).await.unwrap_err();
    assert_eq!(err, CartError::SessionNotFound("cart_1".into()));

    let err = system.cart_client.delete(cart_id).await.unwrap_err();
    assert_eq!(err, CartError::SessionNotFound("cart_1".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sessions_over_one_store_see_the_same_lines() {
    let system = CartSystem::new(&AppConfig::default()).unwrap();
    let first = system.open_cart().await.unwrap();
    let second = system.open_cart().await.unwrap();
    assert_ne!(first, second);

    system
        .cart_client
        .add_product(first, &pad(), 2)
        .await
        .unwrap();
    let seen = system.cart_client.read_cart(second).await.unwrap();
    assert_eq!(seen.total_units(), 2);

    system.shutdown().await.unwrap();
}

/// A file-backed cart survives a restart of the whole system.
#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        store_path: Some(dir.path().join("cart.json")),
        ..AppConfig::default()
    };

    let system = CartSystem::new(&config).unwrap();
    let cart_id = system.open_cart().await.unwrap();
    system
        .cart_client
        .add_product(cart_id, &pad(), 2)
        .await
        .unwrap();
    let before = system
        .cart_client
        .add_product(cart_id, &headset(), 1)
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    let system = CartSystem::new(&config).unwrap();
    let cart_id = system.open_cart().await.unwrap();
    let after = system.cart_client.read_cart(cart_id).await.unwrap();
    assert_eq!(after.lines, before.lines);
    assert_eq!(after.total(), Decimal::from(4000));

    system.cart_client.checkout(cart_id).await.unwrap();
    system.shutdown().await.unwrap();

    let system = CartSystem::new(&config).unwrap();
    let cart_id = system.open_cart().await.unwrap();
    assert!(system.cart_client.read_cart(cart_id).await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_open_fails_when_store_is_down() {
    let store = Arc::new(MemoryLineItemStore::new());
    store.set_available(false);
    let system = CartSystem::with_store(&AppConfig::default(), store).unwrap();

    let err = system.open_cart().await.unwrap_err();
    assert!(matches!(err, CartError::StorageUnavailable(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_actor_buffer_fails_before_spawning() {
    let config = AppConfig {
        actor_buffer: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        CartSystem::new(&config),
        Err(ConfigError::ZeroActorBuffer)
    ));
}
