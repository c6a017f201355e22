//! Shopping cart module.
//!
//! In-memory, session-scoped cart keyed by (movie id, transaction type).

mod cart;
mod key;

pub use cart::{Cart, CartTotals, LineItem};
pub use key::LineKey;
