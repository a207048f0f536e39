//! Benchmarks for query execution
//!
//! Run with: cargo bench --package query-engine
//!
//! Uses a synthetic 200k-title store so no dataset files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Movie, NumericField, Rating, RecordStore};
use query_engine::{Command, Dispatcher};

const GENRES: [&str; 4] = ["Drama", "Comedy,Romance", "Action,Crime", "Documentary,Short"];

fn synthetic_store(size: usize) -> RecordStore {
    let movies = (0..size)
        .map(|i| Movie {
            tconst: format!("tt{i:07}"),
            title_type: if i % 3 == 0 { "short" } else { "movie" }.to_string(),
            primary_title: format!("Title {}", i % 997),
            start_year: NumericField::parse(&(1950 + i % 70).to_string()).unwrap(),
            runtime_minutes: NumericField::parse(&(i % 240).to_string()).unwrap(),
            genres: GENRES[i % GENRES.len()].to_string(),
        })
        .collect();
    let ratings = (0..size)
        .step_by(2)
        .map(|i| Rating {
            tconst: format!("tt{i:07}"),
            avg_rating: NumericField::parse(&format!("{}.{}", i % 10, i % 7)).unwrap(),
            num_votes: NumericField::parse(&(i * 37 % 50_000).to_string()).unwrap(),
        })
        .collect();
    RecordStore::from_records(movies, ratings)
}

fn benchmark_queries(c: &mut Criterion) {
    let store = synthetic_store(200_000);
    let dispatcher = Dispatcher::new(&store);

    for line in [
        "CONTAINS movie Title 42",
        "YEAR_AND_GENRE movie 1999 Drama",
        "RUNTIME movie 90 120",
        "MOST_VOTES movie 20",
        "TOP movie 10 1990 2010",
    ] {
        let command = Command::parse(line).unwrap();
        c.bench_function(command.name(), |b| {
            b.iter(|| dispatcher.execute(black_box(&command)).unwrap())
        });
    }
}

criterion_group!(benches, benchmark_queries);
criterion_main!(benches);
