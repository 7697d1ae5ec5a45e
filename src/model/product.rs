//! A catalog product as the cart sees it.
//!
//! # Snapshot Semantics
//! The cart never holds a live reference into the catalog. [`CartLine`](crate::model::CartLine)
//! owns a clone taken at add time, so a later price change in the catalog does not
//! alter a cart that already contains the item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Catalog identifier for a product (e.g. `"JM001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price before discount. Never negative.
    pub price: Decimal,
    /// Percentage off the unit price, 0 to 100.
    pub discount: Option<u8>,
    pub available: bool,
    pub rating: f32,
}

impl Product {
    /// Creates an available, unrated product with no discount.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount: None,
            available: true,
            rating: 0.0,
        }
    }

    /// Returns the product with `percent` off. Values above 100 are capped at 100.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent.min(100));
        self
    }

    /// Unit price after the discount, if any.
    ///
    /// Exact decimal arithmetic, no rounding: `2000` at 50% is exactly `1000`.
    pub fn unit_price(&self) -> Decimal {
        match self.discount {
            Some(percent) => {
                let kept = Decimal::from(100 - u32::from(percent.min(100)));
                self.price * kept / Decimal::ONE_HUNDRED
            }
            None => self.price,
        }
    }
}
