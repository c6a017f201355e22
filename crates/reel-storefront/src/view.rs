//! Presentational view models.
//!
//! Pure mappings from domain data to render-ready structures. The host UI
//! turns these into markup; nothing here holds state of its own.

use reel_commerce::catalog::{Catalog, Movie};
use reel_commerce::cart::Cart;
use reel_commerce::ids::MovieId;
use reel_commerce::transaction::TransactionType;
use serde::Serialize;

/// Placeholder text for an empty cart listing.
pub const EMPTY_CART_TEXT: &str = "The cart is empty";

/// A catalog card, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    /// Movie id, for the card's action controls.
    pub id: MovieId,
    pub name: String,
    pub year: i32,
    /// Genres joined for the card subtitle (e.g., "Sci-Fi | Adventure").
    pub genre_line: String,
    /// Rating line (e.g., "4.5/5").
    pub rating_line: String,
    pub director: String,
    pub duration: String,
    pub image_url: String,
    pub trailer_url: String,
    /// Rent button label with price (e.g., "Rent ($3.99)").
    pub rent_label: String,
    /// Buy button label with price (e.g., "Buy ($14.99)").
    pub buy_label: String,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    /// Composite key in wire format, carried by the remove control.
    pub key: String,
    /// Movie title.
    pub name: String,
    /// Transaction label (e.g., "Rental").
    pub label: &'static str,
    pub quantity: i64,
    /// Unit price display (e.g., "$3.99").
    pub unit_display: String,
    /// Line total display (e.g., "$7.98").
    pub total_display: String,
}

/// The rendered cart listing with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Lines in cart insertion order.
    pub lines: Vec<CartLineView>,
    /// Sum of quantities.
    pub item_count: i64,
    /// Running total display (e.g., "$25.00").
    pub total_display: String,
    /// Badge count; `None` means the badge is hidden.
    pub badge: Option<i64>,
}

impl CartView {
    /// Check if there is nothing to list.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Map filtered catalog entries to cards, preserving order.
pub fn movie_cards(movies: &[&Movie]) -> Vec<MovieCard> {
    movies.iter().map(|m| movie_card(m)).collect()
}

fn movie_card(movie: &Movie) -> MovieCard {
    MovieCard {
        id: movie.id,
        name: movie.name.clone(),
        year: movie.year,
        genre_line: movie.genres.join(" | "),
        rating_line: format!("{}/5", movie.rating),
        director: movie.director.clone(),
        duration: movie.duration.clone(),
        image_url: movie.image_url.clone(),
        trailer_url: movie.trailer_url.clone(),
        rent_label: format!(
            "Rent ({})",
            movie.price_for(TransactionType::Rental).display()
        ),
        buy_label: format!(
            "Buy ({})",
            movie.price_for(TransactionType::Purchase).display()
        ),
    }
}

/// Map the cart to a listing with totals.
///
/// Lines whose movie id does not resolve in the catalog are skipped, the
/// same way cart totals skip them.
pub fn cart_view(cart: &Cart, catalog: &Catalog) -> CartView {
    let lines: Vec<CartLineView> = cart
        .items()
        .iter()
        .filter_map(|item| {
            let movie = catalog.get(item.key.movie_id)?;
            Some(CartLineView {
                key: item.key.to_string(),
                name: movie.name.clone(),
                label: item.label(),
                quantity: item.quantity,
                unit_display: item.unit_price.display(),
                total_display: item.line_total().display(),
            })
        })
        .collect();

    let totals = cart.totals(catalog);
    CartView {
        lines,
        item_count: totals.item_count,
        total_display: totals.total.display(),
        badge: (totals.item_count > 0).then_some(totals.item_count),
    }
}
