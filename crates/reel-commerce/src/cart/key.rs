//! Composite cart key.

use crate::ids::MovieId;
use crate::transaction::TransactionType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a cart line: the same movie forms distinct lines when
/// rented and purchased.
///
/// The `Display`/`parse` wire format is `"<id>-<type>"` (e.g.
/// `"12-rental"`), which is what the remove-line control carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// The movie being rented or purchased.
    pub movie_id: MovieId,
    /// Rental or purchase.
    pub transaction: TransactionType,
}

impl LineKey {
    /// Create a key from its parts.
    pub fn new(movie_id: MovieId, transaction: TransactionType) -> Self {
        Self {
            movie_id,
            transaction,
        }
    }

    /// Parse the wire format. Returns `None` for anything malformed.
    pub fn parse(s: &str) -> Option<Self> {
        let (id, transaction) = s.trim().split_once('-')?;
        Some(Self {
            movie_id: MovieId::parse(id)?,
            transaction: TransactionType::from_str(transaction)?,
        })
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.movie_id, self.transaction.as_str())
    }
}
