//! # Data Loader Crate
//!
//! This crate loads the IMDb title datasets into an in-memory, read-only
//! `RecordStore`.
//!
//! ## Main Components
//!
//! - **types**: Record types (Movie, Rating, NumericField) and the RecordStore
//! - **parser**: Parse the `.tsv` exports, applying sentinel substitution
//! - **index**: Build the RecordStore from a dataset directory
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Dataset, DatasetPaths, RecordStore};
//! use std::path::Path;
//!
//! let paths = DatasetPaths::new(Path::new("data"), Dataset::Small);
//! let store = RecordStore::load(&paths)?;
//!
//! let movie = store.get_movie("tt0000001").unwrap();
//! println!("{} ({})", movie.primary_title, movie.start_year);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use index::{Dataset, DatasetPaths};
pub use types::{Movie, NumericField, Rating, RecordStore, StoreBuilder, Tconst};
