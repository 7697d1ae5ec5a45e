//! # Level-Up Cart Demo
//!
//! Walks one cart through its life against the configured store:
//! 1.  Start a [`CartSystem`] from `LEVELUP_CONFIG` (or defaults).
//! 2.  Add products, merge a repeat add, adjust and remove lines.
//! 3.  Check out and report the shopper's rewards level.

use levelup_core::config::AppConfig;
use levelup_core::lifecycle::{setup_tracing, CartSystem};
use levelup_core::model::Product;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

/// Points the demo shopper holds before this purchase.
const STARTING_POINTS: i64 = 180;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var("LEVELUP_CONFIG") {
        Ok(path) => AppConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => AppConfig::default(),
    };

    info!("Starting Level-Up cart system");
    let system = CartSystem::new(&config).map_err(|e| e.to_string())?;

    let cart_id = system.open_cart().await.map_err(|e| e.to_string())?;
    info!(cart_id = %cart_id, "Cart opened");

    let pad = Product::new("PAD-01", "Wireless Gamepad", Decimal::from(59_000)).with_discount(10);
    let headset = Product::new("HS-07", "Surround Headset", Decimal::from(89_000));

    let span = tracing::info_span!("shopping");
    let cart = async {
        let client = &system.cart_client;
        client.add_product(cart_id, &pad, 1).await?;
        client.add_product(cart_id, &headset, 1).await?;
        // Same product again: merges into the existing line.
        let cart = client.add_product(cart_id, &pad, 2).await?;

        let headset_line = cart
            .line_for_product(&headset.id)
            .map(|line| line.id.clone());
        if let Some(line_id) = headset_line {
            client.adjust_quantity(cart_id, line_id, -1).await?;
        }
        client.read_cart(cart_id).await
    }
    .instrument(span)
    .await;

    let cart = match cart {
        Ok(cart) => cart,
        Err(e) => {
            error!(error = %e, "Shopping failed");
            system.shutdown().await?;
            return Err(e.to_string());
        }
    };

    for line in &cart.lines {
        info!(
            product = %line.product.name,
            quantity = line.quantity,
            line_total = %line.line_total(),
            "Line"
        );
    }
    info!(units = cart.total_units(), total = %cart.total(), "Cart ready");

    let purchased = system
        .cart_client
        .checkout(cart_id)
        .instrument(tracing::info_span!("checkout"))
        .await;

    match purchased {
        Ok(after) => {
            info!(remaining_lines = after.lines.len(), "Checkout complete");

            let earned = (cart.total() / Decimal::from(1000)).floor().to_i64().unwrap_or(0);
            let status = system.tiers.status(STARTING_POINTS + earned);
            info!(
                points = status.points,
                tier = %status.current.name,
                next = status.next.as_ref().map(|t| t.name.as_str()).unwrap_or("-"),
                progress = status.progress,
                "Rewards level"
            );
        }
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
