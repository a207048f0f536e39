use data_loader::{Dataset, DatasetPaths, RecordStore};
use std::path::Path;
use std::time::Instant;

fn main() {
    let paths = DatasetPaths::new(Path::new("data"), Dataset::Full);

    println!("Loading IMDb title dataset...\n");

    let start = Instant::now();
    let store = RecordStore::load(&paths)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (movies, ratings) = store.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Ratings: {}", ratings);
    println!("\nPerformance: {:.0} titles/second",
             movies as f64 / elapsed.as_secs_f64());
}
