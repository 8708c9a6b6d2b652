use fib_sssp::graph::MutableGraph;
use fib_sssp::{Dijkstra, DirectedGraph, FibonacciHeap, HeapBackend, PriorityItem, ShortestPathAlgorithm};

fn main() {
    // Create a simple directed graph
    let mut graph: DirectedGraph<u64> = DirectedGraph::with_capacity(5);

    // Add edges with weights
    graph.add_edge(0, 1, 1);
    graph.add_edge(0, 2, 4);
    graph.add_edge(1, 2, 2);
    graph.add_edge(1, 3, 5);
    graph.add_edge(2, 3, 1);
    // Vertex 4 has no incoming edges

    for backend in [HeapBackend::Binary, HeapBackend::Fibonacci] {
        let dijkstra = Dijkstra::new().with_backend(backend);
        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

        println!(
            "\n{} results:",
            <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::name(&dijkstra)
        );
        for v in 0..result.labels.len() {
            let path =
                <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::get_path(&dijkstra, &result, v);
            match (result.distance(v), path) {
                (Some(dist), Some(path)) => println!("Vertex {}: distance = {}, path = {:?}", v, dist, path),
                _ => println!("Vertex {}: no path exists", v),
            }
        }
    }

    // The heap on its own
    let mut heap = FibonacciHeap::new();
    for value in [7u64, 3, 21, 23, 18] {
        heap.insert(PriorityItem::new(value as usize, value));
    }
    heap.extract_min().unwrap();
    println!("\nFibonacci heap after one extraction:\n{}", heap);
}
