//! The six query commands.
//!
//! Each command filters the `RecordStore`, orders the matches and renders
//! them. `matches` exposes the ordered result for programmatic use; `run`
//! (from the `Query` trait) produces the report.

pub mod contains;
pub mod lookup;
pub mod most_votes;
pub mod runtime;
pub mod top;
pub mod year_and_genre;

pub use contains::ContainsQuery;
pub use lookup::LookupQuery;
pub use most_votes::MostVotesQuery;
pub use runtime::RuntimeQuery;
pub use top::TopQuery;
pub use year_and_genre::YearAndGenreQuery;
