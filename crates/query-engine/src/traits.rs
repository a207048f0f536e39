//! Core trait for the query commands.
//!
//! Every command is a filter, an ordering and a rendering step over the
//! read-only `RecordStore`. Implementations hold their arguments; running one
//! never mutates the store or any shared state.

use crate::error::Result;
use crate::format::Report;
use data_loader::RecordStore;

pub trait Query {
    /// Command name as it appears in the command stream (e.g. "RUNTIME")
    fn name(&self) -> &'static str;

    /// Filter, order and render against `store`.
    ///
    /// # Returns
    /// * `Ok(Report)` - The formatted lines, including any "not found" lines
    /// * `Err` - If an argument is malformed
    fn run(&self, store: &RecordStore) -> Result<Report>;
}
