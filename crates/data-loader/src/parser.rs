//! Parser for the IMDb TSV exports.
//!
//! Handles the two tab-separated files:
//! - `*.basics.tsv`: tconst, titleType, primaryTitle, originalTitle, isAdult,
//!   startYear, endYear, runtimeMinutes, genres
//! - `*.ratings.tsv`: tconst, averageRating, numVotes
//!
//! Both files start with a header line. Missing values are written as `\N`
//! and are replaced with sentinels here ("0" for numbers, "None" for genres)
//! so every record field is always present and parseable.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

/// Marker the IMDb exports use for a missing value
const MISSING: &str = "\\N";

const BASICS_FIELDS: usize = 9;
const RATINGS_FIELDS: usize = 3;

fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a `*.basics.tsv` file, skipping adult titles
pub fn parse_basics(path: &Path) -> Result<Vec<Movie>> {
    parse_basics_from(open(path)?, &file_label(path))
}

/// Parse a `*.ratings.tsv` file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    parse_ratings_from(open(path)?, &file_label(path))
}

/// Parse basics rows from any reader. `file` is only used in error messages.
pub fn parse_basics_from<R: BufRead>(reader: R, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();
    for_each_row(reader, file, BASICS_FIELDS, |fields, line_no| {
        if fields[4] == "1" {
            return Ok(());
        }
        let start_year = or_sentinel(fields[5], "0");
        let runtime = or_sentinel(fields[7], "0");

        movies.push(Movie {
            tconst: fields[0].to_string(),
            title_type: fields[1].to_string(),
            primary_title: fields[2].to_string(),
            start_year: numeric(start_year, "startYear", file, line_no)?,
            runtime_minutes: numeric(runtime, "runtimeMinutes", file, line_no)?,
            genres: or_sentinel(fields[8], "None").to_string(),
        });
        Ok(())
    })?;
    Ok(movies)
}

/// Parse ratings rows from any reader. `file` is only used in error messages.
pub fn parse_ratings_from<R: BufRead>(reader: R, file: &str) -> Result<Vec<Rating>> {
    let mut ratings = Vec::new();
    for_each_row(reader, file, RATINGS_FIELDS, |fields, line_no| {
        ratings.push(Rating {
            tconst: fields[0].to_string(),
            avg_rating: numeric(fields[1], "averageRating", file, line_no)?,
            num_votes: numeric(fields[2], "numVotes", file, line_no)?,
        });
        Ok(())
    })?;
    Ok(ratings)
}

/// Skip the header, then hand each non-blank row to `row` as its tab-split
/// fields and 1-based line number.
fn for_each_row<R, F>(reader: R, file: &str, min_fields: usize, mut row: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&[&str], usize) -> Result<()>,
{
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            header?;
        }
        None => {
            return Err(DataLoadError::MissingHeader {
                file: file.to_string(),
            });
        }
    }

    for (idx, line) in lines.enumerate() {
        let line = line?;
        // header is line 1
        let line_no = idx + 2;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < min_fields {
            return Err(DataLoadError::FieldCountMismatch {
                file: file.to_string(),
                expected: min_fields,
                found: fields.len(),
                line: line_no,
            });
        }
        row(&fields, line_no)?;
    }
    Ok(())
}

fn or_sentinel<'a>(value: &'a str, sentinel: &'a str) -> &'a str {
    if value == MISSING { sentinel } else { value }
}

fn numeric<T>(text: &str, field: &str, file: &str, line: usize) -> Result<NumericField<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    NumericField::parse(text).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {:?} ({})", field, text, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASICS: &str = "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres\n\
        tt0000001\tshort\tCarmencita\tCarmencita\t0\t1894\t\\N\t1\tDocumentary,Short\n\
        tt0000002\tmovie\tHidden\tHidden\t1\t1990\t\\N\t80\tDrama\n\
        tt0000003\tmovie\tUnknown\tUnknown\t0\t\\N\t\\N\t\\N\t\\N\n";

    #[test]
    fn test_parse_basics_skips_adult_titles() {
        let movies = parse_basics_from(BASICS.as_bytes(), "basics").unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].tconst, "tt0000001");
        assert_eq!(movies[1].tconst, "tt0000003");
    }

    #[test]
    fn test_parse_basics_substitutes_sentinels() {
        let movies = parse_basics_from(BASICS.as_bytes(), "basics").unwrap();
        let unknown = &movies[1];

        assert_eq!(unknown.start_year.as_str(), "0");
        assert_eq!(unknown.start_year.value(), 0);
        assert_eq!(unknown.runtime_minutes.value(), 0);
        assert_eq!(unknown.genres, "None");
    }

    #[test]
    fn test_parse_ratings_keeps_original_text() {
        let input = "tconst\taverageRating\tnumVotes\ntt0000001\t7.0\t1650\n";
        let ratings = parse_ratings_from(input.as_bytes(), "ratings").unwrap();

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].avg_rating.to_string(), "7.0");
        assert_eq!(ratings[0].avg_rating.value(), 7.0);
        assert_eq!(ratings[0].num_votes.value(), 1650);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let input = "tconst\taverageRating\tnumVotes\ntt0000001\t7.0\t1650\ntt0000002\tbad\t3\n";
        let err = parse_ratings_from(input.as_bytes(), "ratings").unwrap_err();

        assert!(matches!(err, DataLoadError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let input = "tconst\taverageRating\tnumVotes\ntt0000001\t7.0\n";
        let err = parse_ratings_from(input.as_bytes(), "ratings").unwrap_err();

        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 3, found: 2, line: 2, .. }
        ));
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let err = parse_ratings_from("".as_bytes(), "ratings").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingHeader { .. }));
    }
}
