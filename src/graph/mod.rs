pub mod generators;
pub mod loader;
pub mod map;
pub mod node;
pub mod reweighted;
pub mod traits;

pub use map::Graph;
pub use node::{ClosestNode, Coordinates, EdgeWeights, Node, NodeHandle, NodeId, NodeRef, NodeSummary};
pub use traits::WeightedGraph;
