//! CONTAINS: titles of a type whose primary title contains a phrase.

use crate::error::Result;
use crate::format::{self, Report};
use crate::traits::Query;
use data_loader::{Movie, RecordStore};
use rayon::prelude::*;
use tracing::debug;

/// Substring search over primary titles, reported in store order.
///
/// Matching is case-sensitive unless [`ContainsQuery::ignore_case`] is set.
pub struct ContainsQuery {
    title_type: String,
    phrase: String,
    ignore_case: bool,
}

impl ContainsQuery {
    pub fn new(title_type: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            title_type: title_type.into(),
            phrase: phrase.into(),
            ignore_case: false,
        }
    }

    /// Compare titles case-insensitively (default: false)
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn matches<'a>(&self, store: &'a RecordStore) -> Vec<&'a Movie> {
        let needle = if self.ignore_case {
            self.phrase.to_lowercase()
        } else {
            self.phrase.clone()
        };

        let found: Vec<&Movie> = store
            .movies()
            .par_iter()
            .filter(|movie| movie.title_type == self.title_type)
            .filter(|movie| {
                if self.ignore_case {
                    movie.primary_title.to_lowercase().contains(&needle)
                } else {
                    movie.primary_title.contains(&needle)
                }
            })
            .collect();

        debug!("CONTAINS {} {:?}: {} matches", self.title_type, self.phrase, found.len());
        found
    }
}

impl Query for ContainsQuery {
    fn name(&self) -> &'static str {
        "CONTAINS"
    }

    fn run(&self, store: &RecordStore) -> Result<Report> {
        let movies = self.matches(store);
        Ok(Report::from_items(&movies, |_, movie| format::movie_line(movie)))
    }
}
