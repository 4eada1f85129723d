use campus_routes::graph::generators::generate_campus_grid;
use campus_routes::{Graph, Routes, WeightStrategy};
use std::time::{Duration, Instant};

// Function to benchmark a single-source engine from the grid corner
fn benchmark_engine<F>(name: &str, graph: &Graph, run: F) -> Duration
where
    F: Fn(&Graph) -> campus_routes::Result<Routes>,
{
    println!("Running {} on graph with {} nodes...", name, graph.node_count());

    let start = Instant::now();
    let result = run(graph);
    let duration = start.elapsed();

    match result {
        Ok(routes) => {
            let reachable = routes.values().filter(|r| r.is_reachable()).count();
            println!("  - Found {} reachable nodes in {:?}", reachable, duration);
        }
        Err(e) => println!("  - Failed: {}", e),
    }

    duration
}

fn main() {
    env_logger::init();

    // Grid side lengths; nodes = side^2
    let sides = vec![10, 32, 100, 200];
    let building_ratio = 0.1;
    let strategy = WeightStrategy::Distance;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford vs A*");
    println!("Building ratio: {}", building_ratio);
    println!("=====================================================");

    let mut results = Vec::new();

    for &side in &sides {
        println!("\nGenerating {}x{} campus grid...", side, side);
        let graph = match generate_campus_grid(side, side, building_ratio, 42) {
            Ok(graph) => graph,
            Err(e) => {
                println!("Grid generation failed: {}", e);
                continue;
            }
        };
        let goal = format!("r{}c{}", side - 1, side - 1);

        println!(
            "Graph has {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let dijkstra_time = benchmark_engine("Dijkstra", &graph, |g| g.dijkstra("r0c0", strategy));
        let bellman_ford_time =
            benchmark_engine("Bellman-Ford", &graph, |g| g.bellman_ford("r0c0", strategy));

        let start = Instant::now();
        let a_star = graph.a_star("r0c0", goal.as_str(), strategy);
        let a_star_time = start.elapsed();
        match a_star {
            Ok(route) => println!(
                "A* r0c0 -> {}: {} m over {} nodes in {:?}",
                goal,
                route.distance,
                route.path.len(),
                a_star_time
            ),
            Err(e) => println!("A* failed: {}", e),
        }

        results.push((side * side, dijkstra_time, bellman_ford_time, a_star_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<17} | {:<10}",
        "Nodes", "Dijkstra (ms)", "Bellman-Ford (ms)", "A* (ms)"
    );
    println!("-----------------------------------------------------");

    for (nodes, dijkstra_time, bellman_ford_time, a_star_time) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<17.2} | {:<10.2}",
            nodes,
            dijkstra_time.as_secs_f64() * 1000.0,
            bellman_ford_time.as_secs_f64() * 1000.0,
            a_star_time.as_secs_f64() * 1000.0
        );
    }
}
