//! Cart lines and the cart projection rebuilt from them.

use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for an open cart session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Identifier of one line within a cart. Distinct from the product id it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub String);

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One persisted row of a cart: a product snapshot and how many of it.
///
/// `quantity` is always at least 1 once stored; the engine deletes a line rather than
/// persisting it at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(id: impl Into<LineId>, product: Product, quantity: u32) -> Self {
        Self {
            id: id.into(),
            product,
            quantity,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price after discount times quantity.
    pub fn line_total(&self) -> Decimal {
        self.product.unit_price() * Decimal::from(self.quantity)
    }
}

/// Read-only projection of a cart.
///
/// Built fresh from the store after every operation and never kept as the source of
/// truth between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    /// Total quoted by the remote gateway, when one has been supplied.
    pub total_override: Option<Decimal>,
}

impl Cart {
    pub fn new(lines: Vec<CartLine>, total_override: Option<Decimal>) -> Self {
        Self {
            lines,
            total_override,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    pub fn line_for_product(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    /// Sum of every line total.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The server override when present, otherwise the subtotal.
    pub fn total(&self) -> Decimal {
        self.total_override.unwrap_or_else(|| self.subtotal())
    }

    /// Sum of quantities across lines.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
