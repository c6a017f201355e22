//! Catalog filtering.

use crate::catalog::Movie;
use crate::search::CategoryFilter;

/// Filter the catalog by search term and category.
///
/// A non-empty term (after trim/lowercase) wins over the category: it
/// matches as a case-insensitive substring against name, director,
/// synopsis, joined genres, year, joined actors, and language. With no
/// term, a genre selection keeps only movies carrying that genre. The
/// input order is preserved; no matches yields an empty vec.
pub fn filter_movies<'a>(
    movies: &'a [Movie],
    term: &str,
    category: &CategoryFilter,
) -> Vec<&'a Movie> {
    let needle = term.trim().to_lowercase();

    if !needle.is_empty() {
        return movies.iter().filter(|m| matches_term(m, &needle)).collect();
    }

    match category {
        CategoryFilter::All => movies.iter().collect(),
        CategoryFilter::Genre(genre) => movies.iter().filter(|m| m.has_genre(genre)).collect(),
    }
}

/// Substring match across all searchable movie fields.
///
/// `needle` must already be trimmed and lowercased.
fn matches_term(movie: &Movie, needle: &str) -> bool {
    let fields = [
        movie.name.clone(),
        movie.director.clone(),
        movie.synopsis.clone(),
        movie.genres.join(" "),
        movie.year.to_string(),
        movie.actors.join(" "),
        movie.language.clone(),
    ];
    fields.iter().any(|f| f.to_lowercase().contains(needle))
}
