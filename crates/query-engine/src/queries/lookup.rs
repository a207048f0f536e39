//! LOOKUP: a title and its rating by tconst.

use crate::error::Result;
use crate::format::{self, Report};
use crate::traits::Query;
use data_loader::{Movie, Rating, RecordStore};

/// Finds a title by id. A title only counts as found when it has a rating,
/// so a movie without one reports both "not found" lines.
pub struct LookupQuery {
    tconst: String,
}

impl LookupQuery {
    pub fn new(tconst: impl Into<String>) -> Self {
        Self {
            tconst: tconst.into(),
        }
    }

    pub fn matches<'a>(&self, store: &'a RecordStore) -> Option<(&'a Movie, &'a Rating)> {
        let rating = store.get_rating(&self.tconst)?;
        let movie = store.get_movie(&self.tconst)?;
        Some((movie, rating))
    }
}

impl Query for LookupQuery {
    fn name(&self) -> &'static str {
        "LOOKUP"
    }

    fn run(&self, store: &RecordStore) -> Result<Report> {
        let lines = match self.matches(store) {
            Some((movie, rating)) => format::lookup_lines(movie, rating),
            None => format::lookup_miss_lines(),
        };

        let mut report = Report::new();
        for line in lines {
            report.push(line);
        }
        Ok(report)
    }
}
