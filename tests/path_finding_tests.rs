use campus_routes::graph::generators::{generate_campus_grid, generate_geometric};
use campus_routes::{AllPairs, Coordinates, Graph, Route, WeightStrategy};

const STRATEGIES: [WeightStrategy; 2] = [WeightStrategy::Distance, WeightStrategy::Time];

// Test helper: nodes A, B, C with bidirectional A-B (5/5) and B-C (3/3)
fn create_chain(middle_is_building: bool) -> Graph {
    let mut graph = Graph::new("chain");
    graph.add_node("A", Coordinates::new(22.3650, 113.5390), None, false).unwrap();
    graph.add_node("B", Coordinates::new(22.3651, 113.5391), None, middle_is_building).unwrap();
    graph.add_node("C", Coordinates::new(22.3652, 113.5392), None, false).unwrap();
    graph.add_edge("A", "B", 5.0, 5.0, true).unwrap();
    graph.add_edge("B", "C", 3.0, 3.0, true).unwrap();
    graph
}

// Test helper: a route must follow real edges, sum to its reported metrics,
// and never pass through a building
fn assert_valid_route(graph: &Graph, route: &Route, strategy: WeightStrategy) {
    let mut primary = 0.0;
    let mut secondary = 0.0;

    for pair in route.path.windows(2) {
        let from = graph.node(&pair[0]).expect("path node exists");
        let to = graph.resolve(pair[1].as_str()).expect("path node exists");
        let weights = from
            .edge_to(to)
            .unwrap_or_else(|| panic!("no edge {} -> {} in {:?}", pair[0], pair[1], route.path));
        primary += weights.primary(strategy);
        secondary += weights.secondary(strategy);
    }

    assert_eq!(primary, route.primary(strategy), "primary sum of {:?}", route.path);
    assert_eq!(secondary, route.secondary(strategy), "secondary sum of {:?}", route.path);

    if route.path.len() > 2 {
        for name in &route.path[1..route.path.len() - 1] {
            assert!(
                !graph.node(name).unwrap().is_building(),
                "building {} used as a through-hop in {:?}",
                name,
                route.path
            );
        }
    }
}

fn assert_same_primary(expected: &AllPairs, actual: &AllPairs, strategy: WeightStrategy, engine: &str) {
    assert_eq!(expected.len(), actual.len(), "{} source count", engine);
    for (source, routes) in expected {
        let other = &actual[source];
        assert_eq!(routes.len(), other.len(), "{} target count from {}", engine, source);
        for (target, route) in routes {
            let candidate = &other[target];
            assert_eq!(
                route.is_reachable(),
                candidate.is_reachable(),
                "{} reachability {} -> {}",
                engine,
                source,
                target
            );
            assert_eq!(
                route.primary(strategy),
                candidate.primary(strategy),
                "{} cost {} -> {} by {}",
                engine,
                source,
                target,
                strategy
            );
        }
    }
}

#[test]
fn test_concrete_chain_route() {
    let graph = create_chain(false);
    let routes = graph.dijkstra("A", WeightStrategy::Distance).unwrap();

    let to_c = &routes["C"];
    assert_eq!(to_c.distance, 8.0);
    assert_eq!(to_c.time, 8.0);
    assert_eq!(to_c.path_string(), "A -> B -> C");

    // The source itself is not listed
    assert!(!routes.contains_key("A"));
}

#[test]
fn test_unreachable_through_building() {
    let graph = create_chain(true);

    for strategy in STRATEGIES {
        let routes = graph.dijkstra("A", strategy).unwrap();
        assert_eq!(routes["C"].distance, f64::INFINITY);
        assert_eq!(routes["C"].time, f64::INFINITY);
        assert!(routes["C"].path.is_empty());
        // The building itself is still a valid destination
        assert_eq!(routes["B"].path_string(), "A -> B");

        assert!(!graph.bellman_ford("A", strategy).unwrap()["C"].is_reachable());
        assert!(!graph.floyd_warshall(strategy).unwrap()["A"]["C"].is_reachable());
        assert!(!graph.johnson(strategy).unwrap()["A"]["C"].is_reachable());
        assert!(!graph.a_star("A", "C", strategy).unwrap().is_reachable());
    }

    // A building may start a route
    let from_building = graph.dijkstra("B", WeightStrategy::Distance).unwrap();
    assert_eq!(from_building["C"].distance, 3.0);
    assert_eq!(from_building["A"].distance, 5.0);
}

#[test]
fn test_primary_and_secondary_metrics() {
    // Short but slow, or long but fast
    let mut graph = Graph::new("two-ways");
    for name in ["S", "M1", "M2", "T"] {
        graph.add_node(name, Coordinates::default(), None, false).unwrap();
    }
    graph.add_edge("S", "M1", 10.0, 100.0, true).unwrap();
    graph.add_edge("M1", "T", 10.0, 100.0, true).unwrap();
    graph.add_edge("S", "M2", 50.0, 5.0, true).unwrap();
    graph.add_edge("M2", "T", 50.0, 5.0, true).unwrap();

    let shortest = &graph.dijkstra("S", WeightStrategy::Distance).unwrap()["T"];
    assert_eq!(shortest.path_string(), "S -> M1 -> T");
    assert_eq!((shortest.distance, shortest.time), (20.0, 200.0));

    let quickest = &graph.dijkstra("S", WeightStrategy::Time).unwrap()["T"];
    assert_eq!(quickest.path_string(), "S -> M2 -> T");
    assert_eq!((quickest.distance, quickest.time), (100.0, 10.0));
}

#[test]
fn test_equal_cost_tie_goes_to_first_inserted_node() {
    let mut graph = Graph::new("diamond");
    for name in ["S", "X", "Y", "T"] {
        graph.add_node(name, Coordinates::default(), None, false).unwrap();
    }
    graph.add_edge("S", "Y", 1.0, 1.0, true).unwrap();
    graph.add_edge("S", "X", 1.0, 1.0, true).unwrap();
    graph.add_edge("Y", "T", 1.0, 1.0, true).unwrap();
    graph.add_edge("X", "T", 1.0, 1.0, true).unwrap();

    let routes = graph.dijkstra("S", WeightStrategy::Distance).unwrap();
    assert_eq!(routes["T"].path_string(), "S -> X -> T");
}

#[test]
fn test_bidirectional_symmetry() {
    let graph = generate_campus_grid(6, 6, 0.0, 11).unwrap();

    for strategy in STRATEGIES {
        let from_corner = graph.dijkstra("r0c0", strategy).unwrap();
        let from_other = graph.dijkstra("r5c3", strategy).unwrap();
        assert_eq!(
            from_corner["r5c3"].primary(strategy),
            from_other["r0c0"].primary(strategy)
        );
    }
}

#[test]
fn test_cross_algorithm_agreement() {
    for seed in [1u64, 2, 3] {
        let graph = generate_campus_grid(5, 6, 0.2, seed).unwrap();

        for strategy in STRATEGIES {
            let dijkstra = graph.dijkstra_all(strategy).unwrap();
            let bellman_ford = graph.bellman_ford_all(strategy).unwrap();
            let floyd_warshall = graph.floyd_warshall(strategy).unwrap();
            let johnson = graph.johnson(strategy).unwrap();

            assert_eq!(dijkstra.len(), graph.node_count());
            assert_same_primary(&dijkstra, &bellman_ford, strategy, "Bellman-Ford");
            assert_same_primary(&dijkstra, &floyd_warshall, strategy, "Floyd-Warshall");
            assert_same_primary(&dijkstra, &johnson, strategy, "Johnson");
        }
    }
}

// Test helper: 4-connected grid with tenth-unit weights whose sums depend
// on addition order
fn create_fractional_grid(side: usize) -> Graph {
    let name = |r: usize, c: usize| format!("r{}c{}", r, c);
    let mut graph = Graph::new("fractional");
    for r in 0..side {
        for c in 0..side {
            let coordinates = Coordinates::new(22.36 + r as f64 * 0.0005, 113.535 + c as f64 * 0.0005);
            graph.add_node(name(r, c), coordinates, None, (r * side + c) % 7 == 3).unwrap();
        }
    }
    for r in 0..side {
        for c in 0..side {
            let k = (r * 31 + c * 17) % 23 + 1;
            let distance = k as f64 / 10.0;
            let time = ((k * 7) % 19 + 1) as f64 / 10.0;
            if c + 1 < side {
                graph.add_edge(&name(r, c), &name(r, c + 1), distance, time, true).unwrap();
            }
            if r + 1 < side {
                graph.add_edge(&name(r, c), &name(r + 1, c), time, distance, true).unwrap();
            }
        }
    }
    graph
}

#[test]
fn test_fractional_costs_are_summed_along_the_path() {
    // Inserted last-to-first so Floyd-Warshall combines B..D before A..B
    let mut graph = Graph::new("tenths");
    for name in ["D", "C", "B", "A"] {
        graph.add_node(name, Coordinates::default(), None, false).unwrap();
    }
    graph.add_edge("A", "B", 0.1, 0.3, false).unwrap();
    graph.add_edge("B", "C", 0.2, 0.2, false).unwrap();
    graph.add_edge("C", "D", 0.3, 0.1, false).unwrap();

    let distance = 0.1 + 0.2 + 0.3;
    let time = 0.3 + 0.2 + 0.1;
    assert_ne!(distance, 0.1 + (0.2 + 0.3), "grouping must matter for this graph");

    let routes = [
        graph.dijkstra("A", WeightStrategy::Distance).unwrap()["D"].clone(),
        graph.bellman_ford("A", WeightStrategy::Distance).unwrap()["D"].clone(),
        graph.floyd_warshall(WeightStrategy::Distance).unwrap()["A"]["D"].clone(),
        graph.johnson(WeightStrategy::Distance).unwrap()["A"]["D"].clone(),
        graph.a_star("A", "D", WeightStrategy::Distance).unwrap(),
    ];
    for route in &routes {
        assert_eq!(route.path_string(), "A -> B -> C -> D");
        assert_eq!(route.distance, distance);
        assert_eq!(route.time, time);
    }
}

#[test]
fn test_fractional_grid_paths_are_valid() {
    let graph = create_fractional_grid(5);

    for strategy in STRATEGIES {
        let tables = [
            graph.dijkstra_all(strategy).unwrap(),
            graph.bellman_ford_all(strategy).unwrap(),
            graph.floyd_warshall(strategy).unwrap(),
            graph.johnson(strategy).unwrap(),
            graph.a_star_all(strategy).unwrap(),
        ];

        for table in &tables {
            for routes in table.values() {
                for route in routes.values().filter(|r| r.is_reachable()) {
                    assert_valid_route(&graph, route, strategy);
                }
            }
        }
    }
}

#[test]
fn test_every_returned_path_is_valid() {
    let graph = generate_campus_grid(5, 5, 0.25, 9).unwrap();

    for strategy in STRATEGIES {
        let tables = [
            graph.dijkstra_all(strategy).unwrap(),
            graph.bellman_ford_all(strategy).unwrap(),
            graph.floyd_warshall(strategy).unwrap(),
            graph.johnson(strategy).unwrap(),
            graph.a_star_all(strategy).unwrap(),
        ];

        for table in &tables {
            for routes in table.values() {
                for route in routes.values().filter(|r| r.is_reachable()) {
                    assert_valid_route(&graph, route, strategy);
                }
            }
        }
    }
}

#[test]
fn test_a_star_matches_dijkstra_on_distance() {
    // Edge distances are never shorter than the straight line, so the
    // heuristic is admissible for distance
    let graph = generate_geometric(40, 250.0, 5).unwrap();
    let dijkstra = graph.dijkstra_all(WeightStrategy::Distance).unwrap();

    for (start, routes) in &dijkstra {
        for (goal, expected) in routes {
            let route = graph
                .a_star(start.as_str(), goal.as_str(), WeightStrategy::Distance)
                .unwrap();
            assert_eq!(route.is_reachable(), expected.is_reachable(), "{} -> {}", start, goal);
            assert_eq!(route.distance, expected.distance, "{} -> {}", start, goal);
        }
    }
}

#[test]
fn test_a_star_all_includes_self_routes() {
    let graph = create_chain(false);
    let table = graph.a_star_all(WeightStrategy::Time).unwrap();

    assert_eq!(table.len(), 3);
    for name in ["A", "B", "C"] {
        let own = &table[name][name];
        assert_eq!((own.distance, own.time), (0.0, 0.0));
        assert_eq!(own.path, vec![name.to_string()]);
        assert_eq!(table[name].len(), 3);
    }
    assert_eq!(table["C"]["A"].path_string(), "C -> B -> A");
}

#[test]
fn test_a_star_accepts_handles() {
    let mut graph = create_chain(false);
    let d = graph
        .add_node("D", Coordinates::new(22.3653, 113.5393), None, true)
        .unwrap();
    graph.add_edge("C", "D", 2.0, 7.0, false).unwrap();

    let a = graph.node("A").unwrap().handle();
    let route = graph.a_star(a, d, WeightStrategy::Time).unwrap();
    assert_eq!(route.path_string(), "A -> B -> C -> D");
    assert_eq!((route.distance, route.time), (10.0, 15.0));
}
