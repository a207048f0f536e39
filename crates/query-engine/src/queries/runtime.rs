//! RUNTIME: titles of a type whose runtime lies in an inclusive range.

use crate::error::{Result, parse_arg};
use crate::format::{self, Report};
use crate::ordering;
use crate::traits::Query;
use data_loader::{Movie, RecordStore};
use rayon::prelude::*;
use tracing::debug;

pub struct RuntimeQuery {
    title_type: String,
    min_minutes: String,
    max_minutes: String,
}

impl RuntimeQuery {
    pub fn new(
        title_type: impl Into<String>,
        min_minutes: impl Into<String>,
        max_minutes: impl Into<String>,
    ) -> Self {
        Self {
            title_type: title_type.into(),
            min_minutes: min_minutes.into(),
            max_minutes: max_minutes.into(),
        }
    }

    /// Matches sorted by descending runtime, then ascending title
    pub fn matches<'a>(&self, store: &'a RecordStore) -> Result<Vec<&'a Movie>> {
        // signed so that a negative lower bound is accepted
        let min: i64 = parse_arg("min-minutes", &self.min_minutes)?;
        let max: i64 = parse_arg("max-minutes", &self.max_minutes)?;

        let mut found: Vec<&Movie> = store
            .movies()
            .par_iter()
            .filter(|movie| {
                let runtime = i64::from(movie.runtime_minutes.value());
                movie.title_type == self.title_type && min <= runtime && runtime <= max
            })
            .collect();

        found.sort_by(|a, b| ordering::by_runtime_desc_then_title(a, b));
        debug!("RUNTIME {} {} {}: {} matches", self.title_type, min, max, found.len());
        Ok(found)
    }
}

impl Query for RuntimeQuery {
    fn name(&self) -> &'static str {
        "RUNTIME"
    }

    fn run(&self, store: &RecordStore) -> Result<Report> {
        let movies = self.matches(store)?;
        Ok(Report::from_items(&movies, |_, movie| format::movie_line(movie)))
    }
}
