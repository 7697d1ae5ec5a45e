use crate::model::{LineId, Product};
use rust_decimal::Decimal;

/// Operations a cart session performs on behalf of its client.
///
/// Every variant answers with the reconstructed [`Cart`](crate::model::Cart).
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product snapshot, merging by product id.
    AddProduct { product: Product, quantity: u32 },
    /// Changes a line's quantity by `delta`; at or below zero the line is removed.
    AdjustQuantity { line_id: LineId, delta: i64 },
    RemoveLine(LineId),
    /// Clears the cart locally.
    Checkout,
    Read,
    /// Sets or clears the gateway-quoted total.
    SetTotalOverride(Option<Decimal>),
}
