//! Pure data structures shared by the cart engine, the store and the rewards calculator.

pub mod cart;
pub mod product;
pub mod tier;

pub use cart::*;
pub use product::*;
pub use tier::*;
