use std::fmt::Debug;

use crate::graph::{Coordinates, EdgeWeights, NodeId};

/// Read-only view of a dual-weighted directed graph, as seen by the engines.
///
/// Node ids index dense per-graph arrays of length [`slot_count`]; some slots
/// may be empty (deleted nodes), so engines iterate [`node_ids`] rather than
/// `0..slot_count`.
///
/// [`slot_count`]: WeightedGraph::slot_count
/// [`node_ids`]: WeightedGraph::node_ids
pub trait WeightedGraph: Debug {
    /// Length of id-indexed arrays for this graph
    fn slot_count(&self) -> usize;

    /// Ids of live nodes in insertion order
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns the number of live nodes
    fn node_count(&self) -> usize {
        self.node_ids().count()
    }

    /// Returns true if the id refers to a live node
    fn contains_node(&self, id: NodeId) -> bool;

    /// Returns true if the node may only be a route endpoint
    fn is_building(&self, id: NodeId) -> bool;

    /// Returns an iterator over the outgoing edges from a node, in insertion order
    fn outgoing_edges(&self, id: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeWeights)> + '_>;

    /// Weights of the directed edge `from -> to`, if present
    fn edge_weights(&self, from: NodeId, to: NodeId) -> Option<EdgeWeights> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weights)| weights)
    }

    /// Map position of a node, if it has one
    fn coordinates(&self, id: NodeId) -> Option<Coordinates>;
}
