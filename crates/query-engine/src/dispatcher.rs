//! The Dispatcher maps command lines onto queries.
//!
//! It parses one whitespace-separated command at a time, builds the matching
//! `Query` and runs it against the shared read-only store. Commands are
//! independent: nothing is cached between them and a failing command does
//! not stop the stream.

use crate::error::{QueryError, Result};
use crate::format::Report;
use crate::queries::*;
use crate::traits::Query;
use data_loader::RecordStore;
use std::fmt;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, error};

/// A tokenised command line: the command name and its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
}

impl Command {
    /// Split `line` on whitespace. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The first `expected` arguments; extra trailing arguments are ignored
    fn require(&self, expected: usize) -> Result<&[String]> {
        if self.args.len() < expected {
            return Err(QueryError::MissingArgument {
                command: self.name.clone(),
                expected,
                found: self.args.len(),
            });
        }
        Ok(&self.args[..expected])
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Knobs applied to every query the dispatcher builds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// CONTAINS compares titles case-insensitively
    pub ignore_case: bool,
    /// Vote threshold for TOP
    pub min_votes: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            min_votes: top::DEFAULT_MIN_VOTES,
        }
    }
}

pub struct Dispatcher<'a> {
    store: &'a RecordStore,
    options: QueryOptions,
}

impl<'a> Dispatcher<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the query named by `command`
    pub fn build(&self, command: &Command) -> Result<Box<dyn Query>> {
        let query: Box<dyn Query> = match command.name() {
            "LOOKUP" => {
                let args = command.require(1)?;
                Box::new(LookupQuery::new(&args[0]))
            }
            "CONTAINS" => {
                let args = command.require(1)?;
                // the phrase is every token after the title type
                let phrase = command.args()[1..].join(" ");
                Box::new(ContainsQuery::new(&args[0], phrase).ignore_case(self.options.ignore_case))
            }
            "YEAR_AND_GENRE" => {
                let args = command.require(3)?;
                Box::new(YearAndGenreQuery::new(&args[0], &args[1], &args[2]))
            }
            "RUNTIME" => {
                let args = command.require(3)?;
                Box::new(RuntimeQuery::new(&args[0], &args[1], &args[2]))
            }
            "MOST_VOTES" => {
                let args = command.require(2)?;
                Box::new(MostVotesQuery::new(&args[0], &args[1]))
            }
            "TOP" => {
                let args = command.require(4)?;
                Box::new(
                    TopQuery::new(&args[0], &args[1], &args[2], &args[3])
                        .with_min_votes(self.options.min_votes),
                )
            }
            other => return Err(QueryError::UnknownCommand(other.to_string())),
        };
        Ok(query)
    }

    /// Build and run one command
    pub fn execute(&self, command: &Command) -> Result<Report> {
        let query = self.build(command)?;
        debug!("Running query: {}", query.name());
        let report = query.run(self.store)?;
        debug!("Query {} produced {} lines", query.name(), report.lines().len());
        Ok(report)
    }

    /// Run every command line from `reader`, writing each block to `writer`.
    ///
    /// Each block is `processing: <command>`, the report (or a single
    /// diagnostic line if the command failed), an optional elapsed-time line
    /// and a blank line. Returns the number of commands processed.
    pub fn run_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        show_elapsed: bool,
    ) -> Result<usize> {
        let mut processed = 0;
        for line in reader.lines() {
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            writeln!(writer, "processing: {command}")?;
            let start = Instant::now();
            match self.execute(&command) {
                Ok(report) => {
                    if !report.lines().is_empty() {
                        writeln!(writer, "{report}")?;
                    }
                }
                Err(err) => {
                    error!(command = %command, "Query failed: {}", err);
                    writeln!(writer, "\t{err}")?;
                }
            }
            if show_elapsed {
                writeln!(writer, "elapsed time (s): {}", start.elapsed().as_secs_f64())?;
            }
            writeln!(writer)?;
            processed += 1;
        }
        Ok(processed)
    }
}
