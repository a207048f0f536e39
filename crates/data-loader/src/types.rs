//! Core domain types for the IMDb title datasets.
//!
//! This module defines the record types and the read-only `RecordStore`
//! that every query runs against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// The `tconst` identifier shared by a title and its rating (e.g. "tt0000001")
pub type Tconst = String;

// =============================================================================
// NumericField
// =============================================================================

/// A numeric column parsed once at load time.
///
/// The dataset text is kept alongside the parsed value, so output reproduces
/// the file exactly ("7.0" stays "7.0") while sorting and range checks use
/// the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericField<T> {
    value: T,
    text: String,
}

impl<T: FromStr> NumericField<T> {
    /// Parse `text`, keeping it verbatim for display
    pub fn parse(text: &str) -> Result<Self, T::Err> {
        Ok(Self {
            value: text.parse()?,
            text: text.to_string(),
        })
    }
}

impl<T: Copy> NumericField<T> {
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> NumericField<T> {
    /// The text exactly as it appeared in the dataset (after sentinel substitution)
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<T> fmt::Display for NumericField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A non-adult title from `*.basics.tsv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub tconst: Tconst,
    /// Category label, e.g. "movie", "short", "tvEpisode"
    pub title_type: String,
    pub primary_title: String,
    /// "0" when the dataset has no year
    pub start_year: NumericField<u32>,
    /// "0" when the dataset has no runtime
    pub runtime_minutes: NumericField<u32>,
    /// Raw comma-joined genre list, or "None" when the dataset has none
    pub genres: String,
}

/// A rating row from `*.ratings.tsv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub tconst: Tconst,
    pub avg_rating: NumericField<f64>,
    pub num_votes: NumericField<u64>,
}

// =============================================================================
// RecordStore - the read-only in-memory database
// =============================================================================

/// Movies and ratings keyed by `tconst`.
///
/// Records are kept in dataset order; the hash indexes give O(1) lookups.
/// Every rating in the store references a movie in the store.
/// Every store is assembled by a [`StoreBuilder`] (`from_records` and
/// `load` go through one too) and has no mutating methods.
#[derive(Debug)]
pub struct RecordStore {
    movies: Vec<Movie>,
    movie_index: HashMap<Tconst, usize>,
    ratings: Vec<Rating>,
    rating_index: HashMap<Tconst, usize>,
}

impl RecordStore {
    /// Start building a new store
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Get a movie by tconst
    pub fn get_movie(&self, tconst: &str) -> Option<&Movie> {
        self.movie_index.get(tconst).map(|&i| &self.movies[i])
    }

    /// Get a rating by tconst
    pub fn get_rating(&self, tconst: &str) -> Option<&Rating> {
        self.rating_index.get(tconst).map(|&i| &self.ratings[i])
    }

    /// All movies, in dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All ratings, in dataset order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// (movies, ratings)
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.ratings.len())
    }
}

/// Accumulates records before freezing them into a [`RecordStore`].
#[derive(Debug)]
pub struct StoreBuilder {
    store: RecordStore,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            store: RecordStore {
                movies: Vec::new(),
                movie_index: HashMap::new(),
                ratings: Vec::new(),
                rating_index: HashMap::new(),
            },
        }
    }

    /// Insert a movie.
    ///
    /// A repeated tconst replaces the earlier record but keeps its position.
    pub fn insert_movie(&mut self, movie: Movie) {
        let store = &mut self.store;
        match store.movie_index.entry(movie.tconst.clone()) {
            Entry::Occupied(slot) => store.movies[*slot.get()] = movie,
            Entry::Vacant(slot) => {
                slot.insert(store.movies.len());
                store.movies.push(movie);
            }
        }
    }

    /// Insert a rating, returning `false` (and dropping it) when no movie
    /// with the same tconst has been inserted.
    pub fn insert_rating(&mut self, rating: Rating) -> bool {
        let store = &mut self.store;
        if !store.movie_index.contains_key(&rating.tconst) {
            return false;
        }
        match store.rating_index.entry(rating.tconst.clone()) {
            Entry::Occupied(slot) => store.ratings[*slot.get()] = rating,
            Entry::Vacant(slot) => {
                slot.insert(store.ratings.len());
                store.ratings.push(rating);
            }
        }
        true
    }

    pub fn build(self) -> RecordStore {
        self.store
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
