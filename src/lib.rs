//! Campus Routes - dual-metric shortest paths over campus maps
//!
//! Every edge of a campus map carries two independent costs, a physical
//! `distance` and a traversal `time`. A route query optimises one of them (the
//! primary metric) and reports the other (the secondary metric) as the sum along
//! the chosen path. Nodes flagged as buildings may start or end a route but are
//! never used as a through-hop.
//!
//! Five engines are provided: Dijkstra, Bellman-Ford, Floyd-Warshall, Johnson and
//! A*. The usual entry points are the name-level methods on [`Graph`]:
//!
//! ```no_run
//! use campus_routes::{Coordinates, Graph, WeightStrategy};
//!
//! let mut graph = Graph::new("campus");
//! graph.add_node("A", Coordinates::new(22.3650, 113.5390), None, false).unwrap();
//! graph.add_node("B", Coordinates::new(22.3655, 113.5395), None, false).unwrap();
//! graph.add_edge("A", "B", 75.0, 60.0, true).unwrap();
//!
//! let routes = graph.dijkstra("A", WeightStrategy::Distance).unwrap();
//! assert_eq!(routes["B"].path_string(), "A -> B");
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod routing;
pub mod web;

pub use algorithm::{
    AStar, AllPairs, AllPairsAlgorithm, BellmanFord, CancellationToken, Dijkstra, FloydWarshall,
    Johnson, Route, Routes, ShortestPathTree, SingleSourceAlgorithm, Sweep, WeightStrategy,
};
/// Re-export main types for convenient use
pub use graph::{ClosestNode, Coordinates, EdgeWeights, Graph, Node, NodeHandle, NodeId, NodeRef};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid argument type: {0}")]
    InvalidArgumentType(String),

    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Graph contains a negative-weight cycle")]
    NegativeCycleDetected,

    #[error("Computation cancelled")]
    Cancelled,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
