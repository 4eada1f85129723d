pub mod a_star;
pub mod bellman_ford;
pub mod cancel;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod route;
pub mod sweep;
pub mod traits;

pub use route::{AllPairs, PathRecord, Route, Routes};
pub use traits::{
    AllPairsAlgorithm, PathTable, ShortestPathTree, SingleSourceAlgorithm, WeightStrategy,
};

pub use a_star::AStar;
pub use bellman_ford::BellmanFord;
pub use cancel::CancellationToken;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
pub use johnson::Johnson;
pub use sweep::Sweep;
