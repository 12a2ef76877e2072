//! Parallel query benchmark to measure concurrent access performance
//!
//! RangeIndex queries only need &self, so one index can be shared across
//! threads with an Arc and no locking.

use rand::Rng;
use rand::SeedableRng;
use rangetree::{Point, RangeIndex, Rect};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    println!("RangeIndex Parallel Query Benchmark");
    println!("===================================\n");

    let num_items = 200_000;
    let num_tests = 1_000;
    let num_threads = 10;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    println!("Generating {} random points...", num_items);
    let points: Vec<Point> = (0..num_items)
        .map(|_| Point::new(rng.random_range(0..10_000), rng.random_range(0..10_000)))
        .collect();

    println!("Building index...");
    let build_start = Instant::now();
    let index = Arc::new(RangeIndex::new(points));
    println!("  Index built in {:.2}ms\n", build_start.elapsed().as_secs_f64() * 1000.0);

    for (name, side) in [("small", 100), ("large", 3162)] {
        let queries: Arc<Vec<Rect>> = Arc::new(
            (0..num_tests)
                .map(|_| {
                    let min_x = rng.random_range(0..10_000 - side);
                    let min_y = rng.random_range(0..10_000 - side);
                    Rect::new(min_x, min_y, min_x + side, min_y + side)
                })
                .collect(),
        );

        let parallel_start = Instant::now();
        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let index = Arc::clone(&index);
                let queries = Arc::clone(&queries);
                thread::spawn(move || {
                    let mut results = Vec::new();
                    for rect in queries.iter() {
                        index.query_into(rect, &mut results);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let parallel_elapsed = parallel_start.elapsed();
        let total_queries = num_threads * num_tests;
        println!(
            "  {} {} queries (parallel {}x{}):   {:.2}ms ({:.3}us/query)",
            total_queries,
            name,
            num_threads,
            num_tests,
            parallel_elapsed.as_secs_f64() * 1000.0,
            parallel_elapsed.as_secs_f64() * 1_000_000.0 / total_queries as f64
        );
    }
}
