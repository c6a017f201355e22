//! Newtype identifier for catalog movies.
//!
//! The catalog supplies plain integer ids; wrapping them prevents mixing
//! them up with quantities or other integers flowing through the cart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique movie identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MovieId(i64);

impl MovieId {
    /// Create an id from the catalog's integer value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse an id from UI action data (e.g. a `data-id` attribute).
    ///
    /// Returns `None` for anything that is not a valid integer.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<i64>().ok().map(Self)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
