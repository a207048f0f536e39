//! Query engine over the in-memory `RecordStore`.
//!
//! This crate provides:
//! - The Query trait and one implementation per command (LOOKUP, CONTAINS,
//!   YEAR_AND_GENRE, RUNTIME, MOST_VOTES, TOP)
//! - Sort orders and per-year grouping for the results
//! - The report formatter
//! - A Dispatcher that turns command lines into queries
//!
//! ## Architecture
//! Every command runs in three stages:
//! 1. Filter the store down to matching records
//! 2. Order the matches (and group them by year for TOP)
//! 3. Render each match, or "No match found!"
//!
//! ## Example Usage
//! ```ignore
//! use query_engine::{Command, Dispatcher};
//!
//! let dispatcher = Dispatcher::new(&store);
//! let report = dispatcher.execute(&Command::parse("RUNTIME movie 90 120").unwrap())?;
//! println!("{report}");
//! ```

pub mod error;
pub mod traits;
pub mod ordering;
pub mod format;
pub mod queries;
pub mod dispatcher;

// Re-export main types
pub use dispatcher::{Command, Dispatcher, QueryOptions};
pub use error::{QueryError, Result};
pub use format::Report;
pub use ordering::YearGroup;
pub use traits::Query;
