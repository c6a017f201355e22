//! Movie record type.

use crate::ids::MovieId;
use crate::money::Money;
use crate::transaction::TransactionType;
use serde::{Deserialize, Serialize};

/// A movie in the catalog.
///
/// Records are immutable once loaded; the cart captures prices at
/// add-time rather than holding references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: MovieId,
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Director name.
    pub director: String,
    /// Short synopsis.
    pub synopsis: String,
    /// Genres, in catalog order.
    pub genres: Vec<String>,
    /// Principal cast.
    pub actors: Vec<String>,
    /// Original language.
    pub language: String,
    /// Price to rent.
    pub rental_price: Money,
    /// Price to buy.
    pub purchase_price: Money,
    /// Critic rating out of 5.
    pub rating: f64,
    /// Running time (e.g., "2h 35m").
    pub duration: String,
    /// Poster image reference.
    pub image_url: String,
    /// Trailer reference.
    pub trailer_url: String,
}

impl Movie {
    /// Create a movie with the required identity fields; everything else
    /// starts empty and is filled in from the catalog document.
    pub fn new(id: impl Into<MovieId>, name: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
            director: String::new(),
            synopsis: String::new(),
            genres: Vec::new(),
            actors: Vec::new(),
            language: String::new(),
            rental_price: Money::default(),
            purchase_price: Money::default(),
            rating: 0.0,
            duration: String::new(),
            image_url: String::new(),
            trailer_url: String::new(),
        }
    }

    /// Unit price for the given transaction type.
    pub fn price_for(&self, transaction: TransactionType) -> Money {
        match transaction {
            TransactionType::Rental => self.rental_price,
            TransactionType::Purchase => self.purchase_price,
        }
    }

    /// Check whether the movie carries a genre, case-insensitively.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }
}
