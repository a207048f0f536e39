//! YEAR_AND_GENRE: titles of a type from one year carrying a genre.

use crate::error::Result;
use crate::format::{self, Report};
use crate::ordering;
use crate::traits::Query;
use data_loader::{Movie, RecordStore};
use rayon::prelude::*;
use tracing::debug;

/// Year is compared as text against the dataset value, so year "0" selects
/// titles with no known year.
///
/// Genre matching is a substring test on the raw comma-joined list, not a
/// set membership test: "ar" matches "Drama,War".
pub struct YearAndGenreQuery {
    title_type: String,
    year: String,
    genre: String,
}

impl YearAndGenreQuery {
    pub fn new(
        title_type: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title_type: title_type.into(),
            year: year.into(),
            genre: genre.into(),
        }
    }

    /// Matches sorted by ascending primary title
    pub fn matches<'a>(&self, store: &'a RecordStore) -> Vec<&'a Movie> {
        let mut found: Vec<&Movie> = store
            .movies()
            .par_iter()
            .filter(|movie| {
                movie.title_type == self.title_type
                    && movie.start_year.as_str() == self.year
                    && movie.genres.contains(self.genre.as_str())
            })
            .collect();

        found.sort_by(|a, b| ordering::by_title(a, b));
        debug!("YEAR_AND_GENRE {} {} {}: {} matches", self.title_type, self.year, self.genre, found.len());
        found
    }
}

impl Query for YearAndGenreQuery {
    fn name(&self) -> &'static str {
        "YEAR_AND_GENRE"
    }

    fn run(&self, store: &RecordStore) -> Result<Report> {
        let movies = self.matches(store);
        Ok(Report::from_items(&movies, |_, movie| format::movie_line(movie)))
    }
}
