//! Result formatting.
//!
//! Renders records into the fixed text layout of the report. Every line is
//! indented with a tab; `TOP` entries sit one tab deeper under their year.

use data_loader::{Movie, Rating};
use std::fmt;

pub const NO_MATCH: &str = "No match found!";
pub const MOVIE_NOT_FOUND: &str = "Movie not found!";
pub const RATING_NOT_FOUND: &str = "Rating not found!";

/// The rendered output of one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A report holding the single "No match found!" line
    pub fn no_match() -> Self {
        Self {
            lines: vec![format!("\t{NO_MATCH}")],
        }
    }

    /// Render every item with `render`, or "No match found!" when there are none
    pub fn from_items<T>(items: &[T], render: impl Fn(usize, &T) -> String) -> Self {
        if items.is_empty() {
            return Self::no_match();
        }
        Self {
            lines: items
                .iter()
                .enumerate()
                .map(|(i, item)| render(i + 1, item))
                .collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Genres with a space after every comma: "Drama,War" -> "Drama, War"
pub fn display_genres(genres: &str) -> String {
    genres.replace(',', ", ")
}

/// `Identifier: ..., Title: ..., Type: ..., Year: ..., Runtime: ..., Genres: ...`
pub fn movie_fields(movie: &Movie) -> String {
    format!(
        "Identifier: {}, Title: {}, Type: {}, Year: {}, Runtime: {}, Genres: {}",
        movie.tconst,
        movie.primary_title,
        movie.title_type,
        movie.start_year,
        movie.runtime_minutes,
        display_genres(&movie.genres)
    )
}

/// Line used by CONTAINS, YEAR_AND_GENRE and RUNTIME
pub fn movie_line(movie: &Movie) -> String {
    format!("\t{}", movie_fields(movie))
}

/// The two lines of a LOOKUP hit
pub fn lookup_lines(movie: &Movie, rating: &Rating) -> [String; 2] {
    [
        format!("\tMOVIE: {}", movie_fields(movie)),
        format!(
            "\tRATING: Identifier: {}, Rating: {}, Votes: {}",
            rating.tconst, rating.avg_rating, rating.num_votes
        ),
    ]
}

/// The two lines of a LOOKUP miss
pub fn lookup_miss_lines() -> [String; 2] {
    [format!("\t{MOVIE_NOT_FOUND}"), format!("\t{RATING_NOT_FOUND}")]
}

pub fn most_votes_line(rank: usize, movie: &Movie, votes: u64) -> String {
    format!("\t{}. VOTES: {}, MOVIE: {}", rank, votes, movie_fields(movie))
}

pub fn year_header(year: u32) -> String {
    format!("\tYEAR: {year}")
}

pub fn top_line(rank: usize, movie: &Movie, rating: &Rating) -> String {
    format!(
        "\t\t{}. RATING: {}, VOTES: {}, MOVIE: {}",
        rank,
        rating.avg_rating,
        rating.num_votes,
        movie_fields(movie)
    )
}

pub fn year_no_match() -> String {
    format!("\t\t{NO_MATCH}")
}
