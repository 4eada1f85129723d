use campus_routes::graph::generators::generate_campus_grid;
use campus_routes::{
    CancellationToken, Coordinates, Error, FloydWarshall, Graph, Johnson, WeightStrategy,
};

// Test helper: directed graph with one negative edge (B -> C) and no
// negative cycle; every shortest path by distance is unique
fn create_negative_edge_graph() -> Graph {
    let mut graph = Graph::new("negative-edge");
    for name in ["A", "B", "C", "D"] {
        graph.add_node(name, Coordinates::default(), None, false).unwrap();
    }
    graph.add_edge("A", "B", 3.0, 4.0, false).unwrap();
    graph.add_edge("A", "C", 8.0, 2.0, false).unwrap();
    graph.add_edge("B", "C", -2.0, 3.0, false).unwrap();
    graph.add_edge("C", "D", 2.0, 6.0, false).unwrap();
    graph.add_edge("B", "D", 6.0, 1.0, false).unwrap();
    graph.add_edge("D", "A", 4.0, 5.0, false).unwrap();
    graph
}

#[test]
fn test_johnson_matches_bellman_ford_with_negative_edge() {
    let graph = create_negative_edge_graph();

    let johnson = graph.johnson(WeightStrategy::Distance).unwrap();
    let bellman_ford = graph.bellman_ford_all(WeightStrategy::Distance).unwrap();
    assert_eq!(johnson, bellman_ford);

    let from_a = &johnson["A"];
    assert_eq!(from_a["C"].distance, 1.0);
    assert_eq!(from_a["C"].path_string(), "A -> B -> C");
    assert_eq!(from_a["D"].distance, 3.0);
    assert_eq!(from_a["D"].time, 13.0);
    assert_eq!(johnson["B"]["A"].distance, 4.0);
    assert_eq!(johnson["B"]["A"].path_string(), "B -> C -> D -> A");
}

#[test]
fn test_johnson_reports_unreweighted_secondary_metric() {
    let graph = create_negative_edge_graph();
    let johnson = graph.johnson(WeightStrategy::Distance).unwrap();

    // D -> A -> B -> C: time 5 + 4 + 3
    let route = &johnson["D"]["C"];
    assert_eq!(route.path_string(), "D -> A -> B -> C");
    assert_eq!(route.distance, 5.0);
    assert_eq!(route.time, 12.0);
}

#[test]
fn test_johnson_matches_bellman_ford_with_fractional_negative_edge() {
    let mut graph = Graph::new("tenths");
    for name in ["A", "B", "C", "D"] {
        graph.add_node(name, Coordinates::default(), None, false).unwrap();
    }
    graph.add_edge("A", "B", 0.3, 0.1, false).unwrap();
    graph.add_edge("B", "C", -0.1, 0.2, false).unwrap();
    graph.add_edge("C", "D", 0.2, 0.3, false).unwrap();
    graph.add_edge("A", "C", 0.7, 0.4, false).unwrap();
    graph.add_edge("D", "A", 0.5, 0.5, false).unwrap();

    for strategy in [WeightStrategy::Distance, WeightStrategy::Time] {
        assert_eq!(
            graph.johnson(strategy).unwrap(),
            graph.bellman_ford_all(strategy).unwrap(),
            "by {}",
            strategy
        );
    }

    let johnson = graph.johnson(WeightStrategy::Distance).unwrap();
    assert_eq!(johnson["D"]["C"].path_string(), "D -> A -> B -> C");
    assert_eq!(johnson["D"]["C"].distance, 0.5 + 0.3 + -0.1);
    assert_eq!(johnson["D"]["C"].time, 0.5 + 0.1 + 0.2);
    assert_eq!(johnson["B"]["C"].distance, -0.1);
}

#[test]
fn test_johnson_negative_cycle_detected() {
    let mut graph = create_negative_edge_graph();
    // C -> B closes B -> C -> B with total -2 + -1
    graph.add_edge("C", "B", -1.0, 1.0, false).unwrap();

    match graph.johnson(WeightStrategy::Distance) {
        Err(Error::NegativeCycleDetected) => {}
        other => panic!("expected NegativeCycleDetected, got {:?}", other),
    }

    // Time weights are all positive, so the same graph is fine by time
    assert!(graph.johnson(WeightStrategy::Time).is_ok());
}

#[test]
fn test_negative_cycle_through_building_is_detected() {
    let mut graph = Graph::new("building-cycle");
    graph.add_node("A", Coordinates::default(), None, false).unwrap();
    graph.add_node("Hall", Coordinates::default(), None, true).unwrap();
    graph.add_edge("A", "Hall", 1.0, 1.0, false).unwrap();
    graph.add_edge("Hall", "A", -5.0, 1.0, false).unwrap();

    assert!(matches!(
        graph.johnson(WeightStrategy::Distance),
        Err(Error::NegativeCycleDetected)
    ));
}

#[test]
fn test_bellman_ford_tolerates_negative_cycle() {
    let mut graph = create_negative_edge_graph();
    graph.add_edge("C", "B", -1.0, 1.0, false).unwrap();

    // No detection, just a result after V - 1 passes
    let routes = graph.bellman_ford("A", WeightStrategy::Distance).unwrap();
    assert_eq!(routes.len(), 3);
}

#[test]
fn test_johnson_with_buildings_and_negative_edge() {
    let mut graph = Graph::new("campus");
    for (name, is_building) in [("Gate", false), ("Library", true), ("Path", false), ("Lab", false)] {
        graph.add_node(name, Coordinates::default(), None, is_building).unwrap();
    }
    // The only cheap way into Path goes through the Library
    graph.add_edge("Gate", "Library", 1.0, 1.0, false).unwrap();
    graph.add_edge("Library", "Path", -3.0, 1.0, false).unwrap();
    graph.add_edge("Gate", "Path", 10.0, 1.0, false).unwrap();
    graph.add_edge("Path", "Lab", 2.0, 1.0, false).unwrap();

    let johnson = graph.johnson(WeightStrategy::Distance).unwrap();
    assert_eq!(johnson, graph.bellman_ford_all(WeightStrategy::Distance).unwrap());

    // Library is an endpoint only
    assert_eq!(johnson["Gate"]["Lab"].path_string(), "Gate -> Path -> Lab");
    assert_eq!(johnson["Gate"]["Lab"].distance, 12.0);
    // but a route may start there
    assert_eq!(johnson["Library"]["Lab"].distance, -1.0);
}

#[test]
fn test_cancelled_before_start() {
    let graph = generate_campus_grid(4, 4, 0.0, 3).unwrap();
    let token = CancellationToken::new();
    token.cancel();
    assert!(token.is_cancelled());

    let johnson = Johnson::new().with_cancellation(token.clone());
    assert!(matches!(
        graph.all_pairs(&johnson, WeightStrategy::Distance),
        Err(Error::Cancelled)
    ));

    let floyd_warshall = FloydWarshall::new().with_cancellation(token);
    assert!(matches!(
        graph.all_pairs(&floyd_warshall, WeightStrategy::Time),
        Err(Error::Cancelled)
    ));
}

#[test]
fn test_uncancelled_token_runs_to_completion() {
    let graph = generate_campus_grid(3, 3, 0.0, 3).unwrap();
    let token = CancellationToken::new();

    let table = graph
        .all_pairs(&Johnson::new().with_cancellation(token), WeightStrategy::Time)
        .unwrap();
    assert_eq!(table, graph.johnson(WeightStrategy::Time).unwrap());
}
