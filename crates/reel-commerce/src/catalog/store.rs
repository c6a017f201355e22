//! Read-only catalog store.

use crate::catalog::Movie;
use crate::error::CatalogError;
use crate::ids::MovieId;
use std::collections::HashSet;

/// The movie catalog: an ordered, read-only collection.
///
/// Built once at startup; the original catalog order is preserved and
/// used whenever no filter applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog from externally supplied records.
    ///
    /// Rejects duplicate ids, since every cart entry resolves back to the
    /// catalog by id.
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateMovieId(movie.id));
            }
        }
        Ok(Self { movies })
    }

    /// Load a catalog from a JSON array of movie records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    /// Look up a movie by id.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// All movies, in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Distinct genre labels in first-appearance order.
    ///
    /// Used to build the category filter controls.
    pub fn genres(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for movie in &self.movies {
            for genre in &movie.genres {
                if seen.insert(genre.to_lowercase()) {
                    out.push(genre.clone());
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Movie> {
        let mut dune = Movie::new(1, "Dune", 2021);
        dune.genres = vec!["Sci-Fi".to_string(), "Adventure".to_string()];
        let mut amelie = Movie::new(2, "Amelie", 2001);
        amelie.genres = vec!["Comedy".to_string(), "adventure".to_string()];
        vec![dune, amelie]
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(MovieId::new(1)).unwrap().name, "Dune");
        assert!(catalog.get(MovieId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let movies = vec![Movie::new(1, "Dune", 2021), Movie::new(1, "Amelie", 2001)];
        assert!(matches!(
            Catalog::new(movies),
            Err(CatalogError::DuplicateMovieId(_))
        ));
    }

    #[test]
    fn test_genres_distinct_in_order() {
        let catalog = Catalog::new(sample()).unwrap();
        // "adventure" dedupes against "Adventure" case-insensitively.
        assert_eq!(catalog.genres(), vec!["Sci-Fi", "Adventure", "Comedy"]);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::new(sample()).unwrap();
        let json = serde_json::to_string(catalog.movies()).unwrap();

        let loaded = Catalog::from_json(&json).unwrap();
        assert_eq!(loaded, catalog);

        assert!(Catalog::from_json("not json").is_err());
    }
}
