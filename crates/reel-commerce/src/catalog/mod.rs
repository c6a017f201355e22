//! Catalog module.
//!
//! The catalog is a static, read-only list of movies supplied externally
//! and loaded once at session start.

mod movie;
mod store;

pub use movie::Movie;
pub use store::Catalog;
