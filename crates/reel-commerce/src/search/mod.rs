//! Search module.
//!
//! Pure text/genre filtering over the catalog. No matches is an empty
//! result, never an error.

mod filter;
mod query;

pub use filter::filter_movies;
pub use query::{CatalogQuery, CategoryFilter};
