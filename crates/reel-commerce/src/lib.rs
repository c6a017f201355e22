//! Movie rental/purchase domain types and logic for the Reel storefront.
//!
//! This crate provides the in-memory core of a single-session storefront:
//!
//! - **Catalog**: a static, read-only list of movies loaded once at startup
//! - **Search**: text and genre filtering over the catalog
//! - **Cart**: line items keyed by (movie id, transaction type), with
//!   on-demand totals
//!
//! # Example
//!
//! ```rust
//! use reel_commerce::prelude::*;
//!
//! let mut dune = Movie::new(1, "Dune", 2021);
//! dune.rental_price = Money::from_decimal(3.99, Currency::USD);
//!
//! let catalog = Catalog::new(vec![dune]).unwrap();
//!
//! let mut cart = Cart::new();
//! let movie = catalog.get(MovieId::new(1)).unwrap();
//! cart.add(movie.id, movie.price_for(TransactionType::Rental), TransactionType::Rental);
//!
//! let totals = cart.totals(&catalog);
//! assert_eq!(totals.item_count, 1);
//! assert_eq!(totals.total.display(), "$3.99");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod transaction;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::MovieId;
pub use money::{Currency, Money};
pub use transaction::TransactionType;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::MovieId;
    pub use crate::money::{Currency, Money};
    pub use crate::transaction::TransactionType;

    // Catalog
    pub use crate::catalog::{Catalog, Movie};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem, LineKey};

    // Search
    pub use crate::search::{filter_movies, CatalogQuery, CategoryFilter};
}
