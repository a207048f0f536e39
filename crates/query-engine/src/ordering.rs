//! Sort orders for query results.
//!
//! All comparators are total and are used with the stable `sort_by`, so
//! records that tie on every key keep their store order.

use data_loader::{Movie, Rating};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Ascending primary title
pub fn by_title(a: &Movie, b: &Movie) -> Ordering {
    a.primary_title.cmp(&b.primary_title)
}

/// Descending runtime, then ascending title
pub fn by_runtime_desc_then_title(a: &Movie, b: &Movie) -> Ordering {
    b.runtime_minutes
        .value()
        .cmp(&a.runtime_minutes.value())
        .then_with(|| by_title(a, b))
}

/// Descending vote count, then ascending title
pub fn by_votes_desc_then_title(a: &(&Movie, u64), b: &(&Movie, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| by_title(a.0, b.0))
}

/// Descending average rating, then descending votes, then ascending title
pub fn by_rating_desc_then_votes_desc_then_title(
    a: &(&Movie, &Rating),
    b: &(&Movie, &Rating),
) -> Ordering {
    b.1.avg_rating
        .value()
        .total_cmp(&a.1.avg_rating.value())
        .then_with(|| b.1.num_votes.value().cmp(&a.1.num_votes.value()))
        .then_with(|| by_title(a.0, b.0))
}

/// One year of a grouped result
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<T> {
    pub year: u32,
    pub entries: Vec<T>,
}

/// Bucket already-sorted `items` by year.
///
/// Produces one group for every year in `years`, ascending, even when the
/// group is empty. Each group keeps at most `cap` entries, in input order.
pub fn group_by_year<T>(
    items: Vec<T>,
    years: RangeInclusive<u32>,
    cap: usize,
    year_of: impl Fn(&T) -> u32,
) -> Vec<YearGroup<T>> {
    let mut buckets: BTreeMap<u32, Vec<T>> = BTreeMap::new();
    for item in items {
        let year = year_of(&item);
        if !years.contains(&year) {
            continue;
        }
        let bucket = buckets.entry(year).or_default();
        if bucket.len() < cap {
            bucket.push(item);
        }
    }

    years
        .map(|year| YearGroup {
            year,
            entries: buckets.remove(&year).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::NumericField;

    fn movie(title: &str, runtime: &str) -> Movie {
        Movie {
            tconst: format!("tt-{title}"),
            title_type: "movie".to_string(),
            primary_title: title.to_string(),
            start_year: NumericField::parse("2000").unwrap(),
            runtime_minutes: NumericField::parse(runtime).unwrap(),
            genres: "Drama".to_string(),
        }
    }

    fn rating(avg: &str, votes: &str) -> Rating {
        Rating {
            tconst: String::new(),
            avg_rating: NumericField::parse(avg).unwrap(),
            num_votes: NumericField::parse(votes).unwrap(),
        }
    }

    #[test]
    fn test_runtime_is_numeric_not_textual() {
        // "90" sorts after "120" as text but before it as a number
        let mut movies = vec![movie("Short", "90"), movie("Long", "120")];
        movies.sort_by(by_runtime_desc_then_title);

        assert_eq!(movies[0].primary_title, "Long");
    }

    #[test]
    fn test_runtime_ties_break_on_title() {
        let zebra = movie("Zebra", "120");
        let apple = movie("Apple", "120");
        let mango = movie("Mango", "90");
        let mut movies = vec![&zebra, &mango, &apple];
        movies.sort_by(|a, b| by_runtime_desc_then_title(a, b));

        let titles: Vec<&str> = movies.iter().map(|m| m.primary_title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Zebra", "Mango"]);
    }

    #[test]
    fn test_rating_order_uses_all_three_keys() {
        let a = movie("A", "1");
        let b = movie("B", "1");
        let c = movie("C", "1");
        let d = movie("D", "1");
        let (ra, rb, rc, rd) = (
            rating("8.0", "1000"),
            rating("8.0", "1000"),
            rating("8.0", "5000"),
            rating("9.1", "1200"),
        );
        let mut pairs = vec![(&b, &rb), (&a, &ra), (&c, &rc), (&d, &rd)];
        pairs.sort_by(by_rating_desc_then_votes_desc_then_title);

        let titles: Vec<&str> = pairs.iter().map(|(m, _)| m.primary_title.as_str()).collect();
        assert_eq!(titles, vec!["D", "C", "A", "B"]);
    }

    #[test]
    fn test_group_by_year_fills_every_year_and_caps() {
        let items = vec![(2001, 'a'), (2001, 'b'), (2001, 'c'), (2003, 'd'), (1999, 'x')];
        let groups = group_by_year(items, 2000..=2003, 2, |item| item.0);

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].year, 2000);
        assert!(groups[0].entries.is_empty());
        assert_eq!(groups[1].entries, vec![(2001, 'a'), (2001, 'b')]);
        assert!(groups[2].entries.is_empty());
        assert_eq!(groups[3].entries, vec![(2003, 'd')]);
    }

    #[test]
    fn test_group_by_year_inverted_range_is_empty() {
        let groups = group_by_year(vec![(2001, 'a')], 2005..=2000, 10, |item| item.0);
        assert!(groups.is_empty());
    }
}
