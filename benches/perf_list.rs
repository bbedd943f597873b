// benches/perf_list.rs
//! Isolated latency benchmark for the positional list.
//!
//! Run: cargo bench --bench perf_list

use std::time::Instant;

use chainlist::PositionalList;

const WARMUP: usize = 10_000;
const ITERATIONS: usize = 100_000;

fn percentile(sorted: &[u64], p: f64) -> u64 {
    let idx = ((p / 100.0) * sorted.len() as f64) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_stats(name: &str, sorted: &[u64]) {
    println!(
        "{:10} | p50: {:4} ns | p90: {:4} ns | p99: {:4} ns | p999: {:5} ns",
        name,
        percentile(sorted, 50.0),
        percentile(sorted, 90.0),
        percentile(sorted, 99.0),
        percentile(sorted, 99.9),
    );
}

fn main() {
    let mut list: PositionalList<u64> = PositionalList::with_capacity(ITERATIONS);

    // Warmup
    for i in 0..WARMUP {
        let p = list.add_last(i as u64);
        list.delete(p).unwrap();
    }

    let mut add_ns = Vec::with_capacity(ITERATIONS);
    let mut get_ns = Vec::with_capacity(ITERATIONS);
    let mut delete_ns = Vec::with_capacity(ITERATIONS);

    for i in 0..ITERATIONS {
        let start = Instant::now();
        let p = list.add_last(i as u64);
        add_ns.push(start.elapsed().as_nanos() as u64);

        let start = Instant::now();
        let _ = std::hint::black_box(list.get(p));
        get_ns.push(start.elapsed().as_nanos() as u64);

        let start = Instant::now();
        let _ = std::hint::black_box(list.delete(p));
        delete_ns.push(start.elapsed().as_nanos() as u64);
    }

    add_ns.sort_unstable();
    get_ns.sort_unstable();
    delete_ns.sort_unstable();

    println!("\nPositionalList<u64> ({} iterations)", ITERATIONS);
    println!("---------------------------------------------------------");
    print_stats("add_last", &add_ns);
    print_stats("get", &get_ns);
    print_stats("delete", &delete_ns);
    println!();
}
