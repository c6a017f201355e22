//! Transaction type: every cart entry is either a rental or a purchase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a movie is being acquired.
///
/// The same movie can sit in the cart twice, once per transaction type,
/// each with its own quantity and captured unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Time-limited rental.
    Rental,
    /// Outright purchase.
    Purchase,
}

impl TransactionType {
    /// Wire token used in composite cart keys and serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Rental => "rental",
            TransactionType::Purchase => "purchase",
        }
    }

    /// Label shown on cart lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Rental => "Rental",
            TransactionType::Purchase => "Purchase",
        }
    }

    /// Parse a type token.
    ///
    /// Accepts both the wire tokens ("rental"/"purchase") and the card
    /// button action tokens ("rent"/"buy").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rental" | "rent" => Some(TransactionType::Rental),
            "purchase" | "buy" => Some(TransactionType::Purchase),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
