//! MOST_VOTES: the most voted titles of a type.

use crate::error::{Result, parse_cap};
use crate::format::{self, Report};
use crate::ordering;
use crate::traits::Query;
use data_loader::{Movie, RecordStore};
use rayon::prelude::*;
use tracing::debug;

/// Rated titles of one type, by descending votes then ascending title,
/// capped at `top_num` entries overall.
pub struct MostVotesQuery {
    title_type: String,
    top_num: String,
}

impl MostVotesQuery {
    pub fn new(title_type: impl Into<String>, top_num: impl Into<String>) -> Self {
        Self {
            title_type: title_type.into(),
            top_num: top_num.into(),
        }
    }

    /// Capped, ordered (movie, votes) pairs
    pub fn matches<'a>(&self, store: &'a RecordStore) -> Result<Vec<(&'a Movie, u64)>> {
        let top_num = parse_cap("num", &self.top_num)?;

        let mut found: Vec<(&Movie, u64)> = store
            .ratings()
            .par_iter()
            .filter_map(|rating| {
                let movie = store.get_movie(&rating.tconst)?;
                (movie.title_type == self.title_type).then(|| (movie, rating.num_votes.value()))
            })
            .collect();
        debug!("MOST_VOTES {}: {} candidates", self.title_type, found.len());

        found.sort_by(ordering::by_votes_desc_then_title);
        found.truncate(top_num);
        Ok(found)
    }
}

impl Query for MostVotesQuery {
    fn name(&self) -> &'static str {
        "MOST_VOTES"
    }

    fn run(&self, store: &RecordStore) -> Result<Report> {
        let entries = self.matches(store)?;
        Ok(Report::from_items(&entries, |rank, (movie, votes)| {
            format::most_votes_line(rank, movie, *votes)
        }))
    }
}
