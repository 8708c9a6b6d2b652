use std::env;
use std::time::{Duration, Instant};

use fib_sssp::graph::generators::generate_degree_bounded;
use fib_sssp::graph::{DirectedGraph, Graph};
use fib_sssp::{run_shortest_path, HeapBackend, ShortestPathResult};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark parameters, read from positional arguments
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    node_count: usize,
    k_min: usize,
    k_max: usize,
    attempts: usize,
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            node_count: 1000,
            k_min: 0,
            k_max: 50,
            attempts: 100,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    /// `benchmark [node_count] [k_min] [k_max] [attempts] [seed]`
    fn from_args(args: &[String]) -> Self {
        let defaults = BenchmarkConfig::default();
        let arg = |index: usize| args.get(index).and_then(|value| value.parse().ok());

        BenchmarkConfig {
            node_count: arg(1).unwrap_or(defaults.node_count),
            k_min: arg(2).unwrap_or(defaults.k_min),
            k_max: arg(3).unwrap_or(defaults.k_max),
            attempts: arg(4).unwrap_or(defaults.attempts),
            seed: args
                .get(5)
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.seed),
        }
    }
}

// Function to benchmark one backend on a graph
fn time_backend(
    graph: &DirectedGraph<u64>,
    backend: HeapBackend,
) -> Result<(ShortestPathResult<u64>, Duration), fib_sssp::Error> {
    let start = Instant::now();
    let result = run_shortest_path(graph, 0, backend)?;
    Ok((result, start.elapsed()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);
    info!("Benchmark configuration: {:?}", config);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut total_generation = Duration::ZERO;
    let mut total_binary = Duration::ZERO;
    let mut total_fibonacci = Duration::ZERO;
    let mut mismatches = 0;

    for attempt in 0..config.attempts {
        let start = Instant::now();
        let graph = generate_degree_bounded(
            config.node_count,
            config.k_min,
            config.k_max,
            15,
            &mut rng,
        )?;
        total_generation += start.elapsed();

        let (binary, binary_time) = time_backend(&graph, HeapBackend::Binary)?;
        let (fibonacci, fibonacci_time) = time_backend(&graph, HeapBackend::Fibonacci)?;
        total_binary += binary_time;
        total_fibonacci += fibonacci_time;

        if binary.distances() != fibonacci.distances() {
            warn!("Attempt {}: backends disagree on distances", attempt);
            mismatches += 1;
        }
        info!(
            "Attempt {}: {} edges, {} reachable, binary {:?}, fibonacci {:?}",
            attempt,
            graph.edge_count(),
            binary.reachable_count(),
            binary_time,
            fibonacci_time
        );
    }

    let attempts = config.attempts.max(1) as u32;
    println!(
        "Node count: {}, gen. boundaries: [{}, {}], attempts: {}",
        config.node_count, config.k_min, config.k_max, config.attempts
    );
    println!("Average graph gen. duration: {:?}", total_generation / attempts);
    println!("Average binary heap Dijkstra duration: {:?}", total_binary / attempts);
    println!("Average Fibonacci heap Dijkstra duration: {:?}", total_fibonacci / attempts);
    if mismatches > 0 {
        println!("Backends disagreed on {} graphs", mismatches);
    }

    Ok(())
}
