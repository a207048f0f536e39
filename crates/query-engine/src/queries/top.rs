//! TOP: best rated titles of a type for each year of a range.

use crate::error::{QueryError, Result, parse_arg, parse_cap};
use crate::format::{self, Report};
use crate::ordering::{self, YearGroup};
use crate::traits::Query;
use data_loader::{Movie, Rating, RecordStore};
use rayon::prelude::*;
use tracing::debug;

/// Titles need at least this many votes to be ranked
pub const DEFAULT_MIN_VOTES: u64 = 1000;

/// Most years a single TOP command may cover. Every year prints at least
/// two lines, so wider ranges are rejected instead of buffered.
pub const MAX_YEAR_SPAN: u32 = 10_000;

/// Per-year ranking by descending rating, then descending votes, then
/// ascending title. Every year of the range gets its own group and its own
/// `top_num` cap.
pub struct TopQuery {
    title_type: String,
    top_num: String,
    start_year: String,
    end_year: String,
    min_votes: u64,
}

impl TopQuery {
    pub fn new(
        title_type: impl Into<String>,
        top_num: impl Into<String>,
        start_year: impl Into<String>,
        end_year: impl Into<String>,
    ) -> Self {
        Self {
            title_type: title_type.into(),
            top_num: top_num.into(),
            start_year: start_year.into(),
            end_year: end_year.into(),
            min_votes: DEFAULT_MIN_VOTES,
        }
    }

    /// Configure the vote threshold (default: 1000)
    pub fn with_min_votes(mut self, min_votes: u64) -> Self {
        self.min_votes = min_votes;
        self
    }

    /// One group per year from start to end, ascending, each already capped
    pub fn matches<'a>(
        &self,
        store: &'a RecordStore,
    ) -> Result<Vec<YearGroup<(&'a Movie, &'a Rating)>>> {
        let top_num = parse_cap("num", &self.top_num)?;
        let start: u32 = parse_arg("start-year", &self.start_year)?;
        let end: u32 = parse_arg("end-year", &self.end_year)?;
        if end > start && end - start >= MAX_YEAR_SPAN {
            return Err(QueryError::MalformedInput {
                field: "year range".to_string(),
                value: format!("{start} {end}"),
            });
        }

        let mut found: Vec<(&Movie, &Rating)> = store
            .ratings()
            .par_iter()
            .filter(|rating| rating.num_votes.value() >= self.min_votes)
            .filter_map(|rating| {
                let movie = store.get_movie(&rating.tconst)?;
                let year = movie.start_year.value();
                (movie.title_type == self.title_type && start <= year && year <= end)
                    .then_some((movie, rating))
            })
            .collect();
        debug!("TOP {} {}-{}: {} candidates", self.title_type, start, end, found.len());

        found.sort_by(ordering::by_rating_desc_then_votes_desc_then_title);
        Ok(ordering::group_by_year(found, start..=end, top_num, |(movie, _)| {
            movie.start_year.value()
        }))
    }
}

impl Query for TopQuery {
    fn name(&self) -> &'static str {
        "TOP"
    }

    fn run(&self, store: &RecordStore) -> Result<Report> {
        let mut report = Report::new();
        for group in self.matches(store)? {
            report.push(format::year_header(group.year));
            if group.entries.is_empty() {
                report.push(format::year_no_match());
            }
            for (i, (movie, rating)) in group.entries.iter().enumerate() {
                report.push(format::top_line(i + 1, movie, rating));
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::{movie, rating, store};

    fn sample() -> RecordStore {
        store(
            vec![
                movie("tt1", "movie", "Solid", "2001", "100", "Drama"),
                movie("tt2", "movie", "Great", "2001", "100", "Drama"),
                movie("tt3", "movie", "Greater", "2001", "100", "Drama"),
                movie("tt4", "movie", "Obscure", "2001", "100", "Drama"),
                movie("tt5", "movie", "Next Year", "2003", "100", "Drama"),
                movie("tt6", "tvSeries", "Show", "2001", "50", "Drama"),
            ],
            vec![
                rating("tt1", "7.5", "4000"),
                rating("tt2", "8.8", "1000"),
                rating("tt3", "8.8", "2500"),
                rating("tt4", "9.9", "999"),
                rating("tt5", "6.1", "1200"),
                rating("tt6", "9.5", "50000"),
            ],
        )
    }

    #[test]
    fn test_top_groups_every_year() {
        let store = sample();
        let groups = TopQuery::new("movie", "5", "2001", "2003").matches(&store).unwrap();

        let years: Vec<u32> = groups.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2001, 2002, 2003]);

        let titles: Vec<&str> = groups[0].entries.iter().map(|(m, _)| m.primary_title.as_str()).collect();
        assert_eq!(titles, vec!["Greater", "Great", "Solid"]);
        assert!(groups[1].entries.is_empty());
        assert_eq!(groups[2].entries.len(), 1);
    }

    #[test]
    fn test_top_cap_resets_each_year() {
        let store = sample();
        let report = TopQuery::new("movie", "1", "2001", "2003").run(&store).unwrap();

        assert_eq!(report.lines().len(), 6);
        assert_eq!(report.lines()[0], "\tYEAR: 2001");
        assert!(report.lines()[1].starts_with("\t\t1. RATING: 8.8, VOTES: 2500, MOVIE: Identifier: tt3, "));
        assert_eq!(report.lines()[2], "\tYEAR: 2002");
        assert_eq!(report.lines()[3], "\t\tNo match found!");
        assert_eq!(report.lines()[4], "\tYEAR: 2003");
        assert!(report.lines()[5].starts_with("\t\t1. RATING: 6.1, VOTES: 1200, "));
    }

    #[test]
    fn test_top_vote_threshold() {
        let store = sample();
        let groups = TopQuery::new("movie", "5", "2001", "2001")
            .with_min_votes(0)
            .matches(&store)
            .unwrap();

        assert_eq!(groups[0].entries[0].0.primary_title, "Obscure");
    }

    #[test]
    fn test_top_inverted_range_prints_nothing() {
        let store = sample();
        let report = TopQuery::new("movie", "5", "2003", "2001").run(&store).unwrap();

        assert!(report.lines().is_empty());
    }

    #[test]
    fn test_top_rejects_overly_wide_range() {
        let store = sample();
        let err = TopQuery::new("movie", "1", "0", "4294967295").matches(&store).unwrap_err();

        assert!(matches!(
            err,
            QueryError::MalformedInput { ref field, .. } if field == "year range"
        ));
    }

    #[test]
    fn test_top_accepts_widest_allowed_range() {
        let store = sample();
        let end = (2001 + MAX_YEAR_SPAN - 1).to_string();
        let groups = TopQuery::new("movie", "1", "2001", end).matches(&store).unwrap();

        assert_eq!(groups.len(), MAX_YEAR_SPAN as usize);
    }

    #[test]
    fn test_top_negative_cap_is_unlimited() {
        let store = sample();
        let groups = TopQuery::new("movie", "-1", "2001", "2001").matches(&store).unwrap();

        assert_eq!(groups[0].entries.len(), 3);
    }
}
