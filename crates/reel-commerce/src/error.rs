//! Catalog error types.
//!
//! The cart and filter paths deliberately have no error states: lookup
//! misses and empty filter results are benign. Errors only arise when
//! loading the catalog itself.

use crate::ids::MovieId;
use thiserror::Error;

/// Errors that can occur while building the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two movies share the same id.
    #[error("Duplicate movie id in catalog: {0}")]
    DuplicateMovieId(MovieId),

    /// The catalog document could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
