//! RecordStore loading.
//!
//! Parses both dataset files and freezes them into a `RecordStore`:
//! - movies are inserted in file order
//! - ratings without a matching movie are dropped

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which pair of files to read from the data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    /// `title.basics.tsv` / `title.ratings.tsv`
    #[default]
    Full,
    /// `small.basics.tsv` / `small.ratings.tsv`
    Small,
}

impl Dataset {
    fn stem(self) -> &'static str {
        match self {
            Dataset::Full => "title",
            Dataset::Small => "small",
        }
    }
}

/// Resolved locations of the basics and ratings files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub basics: PathBuf,
    pub ratings: PathBuf,
}

impl DatasetPaths {
    pub fn new(data_dir: &Path, dataset: Dataset) -> Self {
        let stem = dataset.stem();
        Self {
            basics: data_dir.join(format!("{stem}.basics.tsv")),
            ratings: data_dir.join(format!("{stem}.ratings.tsv")),
        }
    }
}

impl RecordStore {
    /// Load a dataset from a data directory
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        Self::load_from_files(&paths.basics, &paths.ratings)
    }

    /// Load the store from a basics file and a ratings file.
    ///
    /// Both files are parsed in parallel; ratings are filtered against the
    /// parsed movies afterwards.
    pub fn load_from_files(basics_path: &Path, ratings_path: &Path) -> Result<Self> {
        info!(basics = %basics_path.display(), ratings = %ratings_path.display(), "Loading dataset");

        let (movies, ratings) = rayon::join(
            || parser::parse_basics(basics_path),
            || parser::parse_ratings(ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;

        let store = Self::from_records(movies, ratings);
        let (movie_count, rating_count) = store.counts();
        info!(movies = movie_count, ratings = rating_count, "RecordStore built");
        Ok(store)
    }

    /// Build a store from already-parsed records
    pub fn from_records(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let mut builder = StoreBuilder::new();
        for movie in movies {
            builder.insert_movie(movie);
        }

        let mut dropped = 0usize;
        for rating in ratings {
            if !builder.insert_rating(rating) {
                dropped += 1;
            }
        }
        debug!("Dropped {} ratings with no matching movie", dropped);

        builder.build()
    }
}
