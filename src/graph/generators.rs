use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{Coordinates, Graph};
use crate::Result;

/// South-west corner of generated maps, near the heuristic's calibration latitude
const ORIGIN: Coordinates = Coordinates {
    lat: 22.3600,
    lon: 113.5350,
};

/// Grid spacing in degrees (roughly 55 m north-south)
const SPACING_DEG: f64 = 0.0005;

/// Generates a `rows x cols` walkway grid with 4-connectivity.
///
/// Each node is flagged as a building with probability `building_ratio`.
/// Edges are bidirectional; distances are whole metres no shorter than the
/// planar distance between endpoints, and times are whole seconds at a
/// walking speed drawn per edge.
pub fn generate_campus_grid(
    rows: usize,
    cols: usize,
    building_ratio: f64,
    seed: u64,
) -> Result<Graph> {
    let mut graph = Graph::with_capacity(format!("grid-{}x{}", rows, cols), rows * cols);
    let mut rng = StdRng::seed_from_u64(seed);

    let name = |r: usize, c: usize| format!("r{}c{}", r, c);
    let coordinates = |r: usize, c: usize| {
        Coordinates::new(
            ORIGIN.lat + r as f64 * SPACING_DEG,
            ORIGIN.lon + c as f64 * SPACING_DEG,
        )
    };

    for r in 0..rows {
        for c in 0..cols {
            let is_building = rng.gen_bool(building_ratio.clamp(0.0, 1.0));
            graph.add_node(name(r, c), coordinates(r, c), None, is_building)?;
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let mut neighbors = Vec::with_capacity(2);
            if r + 1 < rows {
                neighbors.push((r + 1, c));
            }
            if c + 1 < cols {
                neighbors.push((r, c + 1));
            }

            for (nr, nc) in neighbors {
                let planar = coordinates(r, c).planar_distance_m(&coordinates(nr, nc));
                let (distance, time) = walkway_weights(&mut rng, planar);
                graph.add_edge(&name(r, c), &name(nr, nc), distance, time, true)?;
            }
        }
    }

    Ok(graph)
}

/// Generates `n` random points and connects every ordered pair closer than
/// `radius_m` metres with a directed edge. No buildings.
pub fn generate_geometric(n: usize, radius_m: f64, seed: u64) -> Result<Graph> {
    let mut graph = Graph::with_capacity(format!("geometric-{}", n), n);
    let mut rng = StdRng::seed_from_u64(seed);

    // Random points inside a ~1 km square
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let coordinates = Coordinates::new(
            ORIGIN.lat + rng.gen_range(0.0..0.009),
            ORIGIN.lon + rng.gen_range(0.0..0.0097),
        );
        let name = format!("p{}", i);
        graph.add_node(name.clone(), coordinates, None, false)?;
        points.push((name, coordinates));
    }

    for (from, a) in &points {
        for (to, b) in &points {
            let planar = a.planar_distance_m(b);
            if from != to && planar <= radius_m {
                let (distance, time) = walkway_weights(&mut rng, planar);
                graph.add_edge(from, to, distance, time, false)?;
            }
        }
    }

    Ok(graph)
}

/// Whole-metre distance and whole-second time for a link spanning `planar`
/// metres, so path sums stay exact
fn walkway_weights(rng: &mut StdRng, planar: f64) -> (f64, f64) {
    let detour = rng.gen_range(1.0..1.3);
    let distance = (planar * detour).ceil().max(1.0);
    let speed = rng.gen_range(0.8..1.6);
    let time = (distance / speed).round().max(1.0);
    (distance, time)
}
