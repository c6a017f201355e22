//! Catalog query state.

use crate::catalog::Movie;
use crate::search::filter_movies;
use serde::{Deserialize, Serialize};

/// Category (genre) filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to movies carrying this genre (case-insensitive match).
    Genre(String),
}

impl CategoryFilter {
    /// Parse a filter-control label. The "all" control (any case) clears
    /// the restriction; anything else selects a genre.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Genre(label.to_string())
        }
    }
}

/// The current search/filter state of the catalog view.
///
/// A non-empty search term takes precedence over the category selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Free-text search term, raw from the input field.
    pub term: String,
    /// Active category selection.
    pub category: CategoryFilter,
}

impl CatalogQuery {
    /// Query matching the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the query, preserving catalog order.
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        filter_movies(movies, &self.term, &self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" ALL "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Sci-Fi"),
            CategoryFilter::Genre("Sci-Fi".to_string())
        );
    }

    #[test]
    fn test_default_query_is_unfiltered() {
        let query = CatalogQuery::new();
        assert_eq!(query.term, "");
        assert_eq!(query.category, CategoryFilter::All);
    }
}
