use fib_sssp::algorithm::dijkstra::{Dijkstra, HeapBackend};
use fib_sssp::algorithm::traits::ShortestPathAlgorithm;
use fib_sssp::graph::generators::{generate_degree_bounded, generate_grid};
use fib_sssp::graph::DirectedGraph;
use fib_sssp::graph::{Graph, MutableGraph};
use fib_sssp::{run_shortest_path, Error, ShortestPathResult};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BACKENDS: [HeapBackend; 2] = [HeapBackend::Binary, HeapBackend::Fibonacci];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn path_of<W, G>(dijkstra: &Dijkstra, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>>
where
    W: fib_sssp::Weight,
    G: Graph<W>,
{
    <Dijkstra as ShortestPathAlgorithm<W, G>>::get_path(dijkstra, result, target)
}

fn four_vertex_graph() -> DirectedGraph<u64> {
    DirectedGraph::from_edges(4, vec![(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)]).unwrap()
}

// Checks that every parent link is a tight edge of the shortest path tree
fn assert_valid_tree(graph: &DirectedGraph<u64>, result: &ShortestPathResult<u64>) {
    for v in 0..graph.vertex_count() {
        match (result.distance(v), result.parent(v)) {
            (Some(dist), Some(parent)) => {
                let weight = graph.get_edge_weight(parent, v).expect("parent edge must exist");
                assert_eq!(result.distance(parent).unwrap() + weight, dist);
            }
            (Some(dist), None) => {
                assert_eq!(v, result.source);
                assert_eq!(dist, 0);
            }
            (None, parent) => assert_eq!(parent, None),
        }
    }
}

#[test]
fn test_four_vertex_scenario() {
    init_logging();
    let graph = four_vertex_graph();

    for backend in BACKENDS {
        let dijkstra = Dijkstra::new().with_backend(backend);
        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(result.distances(), vec![Some(0), Some(1), Some(3), Some(4)]);
        assert_eq!(result.parent(3), Some(2));
        assert_eq!(result.parent(2), Some(1));
        assert_eq!(result.parent(1), Some(0));
        assert_eq!(result.parent(0), None);
        assert!((0..4).all(|v| result.is_settled(v)));

        let path = path_of::<u64, DirectedGraph<u64>>(&dijkstra, &result, 3);
        assert_eq!(path, Some(vec![0, 1, 2, 3]));
    }
}

#[test]
fn test_unreachable_vertex() {
    let mut graph = four_vertex_graph();
    let isolated = graph.add_vertex();
    graph.add_edge(isolated, 0, 1);

    for backend in BACKENDS {
        let dijkstra = Dijkstra::new().with_backend(backend);
        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(result.distance(isolated), None);
        assert_eq!(result.labels[isolated].distance, u64::MAX);
        assert!(result.is_settled(isolated));
        assert!(!result.is_reachable(isolated));
        assert_eq!(result.reachable_count(), 4);
        assert_eq!(path_of::<u64, DirectedGraph<u64>>(&dijkstra, &result, isolated), None);
    }
}

#[test]
fn test_source_not_found() {
    let graph = four_vertex_graph();
    for backend in BACKENDS {
        assert_eq!(run_shortest_path(&graph, 4, backend).unwrap_err(), Error::SourceNotFound);
    }
}

#[test]
fn test_single_vertex_and_zero_weight_edges() {
    let lone: DirectedGraph<u64> = DirectedGraph::with_capacity(1);
    let zero = DirectedGraph::from_edges(3, vec![(0, 1, 0), (1, 2, 0), (0, 2, 5)]).unwrap();

    for backend in BACKENDS {
        let result = run_shortest_path(&lone, 0, backend).unwrap();
        assert_eq!(result.distances(), vec![Some(0)]);

        let result = run_shortest_path(&zero, 0, backend).unwrap();
        assert_eq!(result.distances(), vec![Some(0), Some(0), Some(0)]);
    }
}

#[test]
fn test_from_edges_rejects_unknown_vertex() {
    let err = DirectedGraph::from_edges(2, vec![(0, 1, 1u64), (1, 2, 1)]).unwrap_err();
    assert_eq!(err, Error::InvalidVertex(2));
}

// Test the backends agree on random graphs
#[test]
fn test_backends_agree_on_random_graphs() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let graph = generate_degree_bounded(300, 0, 8, 15, &mut rng).unwrap();
        let binary = run_shortest_path(&graph, 0, HeapBackend::Binary).unwrap();
        let fibonacci = run_shortest_path(&graph, 0, HeapBackend::Fibonacci).unwrap();

        assert_eq!(binary.distances(), fibonacci.distances());
        assert_valid_tree(&graph, &binary);
        assert_valid_tree(&graph, &fibonacci);
    }
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let width = 10;
    let mut graph = generate_grid(width, 10);

    // Create a wall in column 5 that leaves only the bottom row open
    for y in 0..9 {
        let obstacle = y * width + 5;
        for v in 0..graph.vertex_count() {
            graph.remove_edge(v, obstacle);
            graph.remove_edge(obstacle, v);
        }
    }

    let source = 0; // Top-left corner (0,0)
    let target = 9; // Top-right corner (9,0)

    for backend in BACKENDS {
        let dijkstra = Dijkstra::new().with_backend(backend);
        let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

        // Down to the bottom row, across, and back up
        assert_eq!(result.distance(target), Some(9 + 9 + 9));

        let path = path_of::<u64, DirectedGraph<u64>>(&dijkstra, &result, target).unwrap();
        assert_eq!(path[0], source, "Path should start at source");
        assert_eq!(path[path.len() - 1], target, "Path should end at target");
        for i in 1..path.len() {
            assert!(graph.has_edge(path[i - 1], path[i]), "Path should only use existing edges");
        }
        assert!((0..9).all(|y| !path.contains(&(y * width + 5))));
    }
}

#[test]
fn test_float_weights() {
    let mut graph = DirectedGraph::with_capacity(4);
    graph.add_edge(0, 1, OrderedFloat(1.5));
    graph.add_edge(1, 2, OrderedFloat(1.4));
    graph.add_edge(0, 2, OrderedFloat(3.0));
    graph.add_edge(2, 3, OrderedFloat(0.1));

    for backend in BACKENDS {
        let result = run_shortest_path(&graph, 0, backend).unwrap();
        assert_eq!(result.distance(2), Some(OrderedFloat(2.9)));
        assert_eq!(result.parent(2), Some(1));
        assert!(result.distance(3).is_some());
    }
}

#[test]
fn test_algorithm_names() {
    let binary = Dijkstra::new().with_backend(HeapBackend::Binary);
    let fibonacci = Dijkstra::new();
    assert_eq!(fibonacci.backend(), HeapBackend::Fibonacci);
    assert_ne!(
        <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::name(&binary),
        <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::name(&fibonacci)
    );
}
