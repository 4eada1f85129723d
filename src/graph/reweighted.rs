//! Private graph views built by Johnson's algorithm.
//!
//! Both views borrow the original graph and share its node ids; neither
//! mutates it.

use crate::algorithm::WeightStrategy;
use crate::graph::traits::WeightedGraph;
use crate::graph::{Coordinates, EdgeWeights, NodeId};

/// The original graph plus a virtual super-source with zero-weight edges (both
/// metrics) to every live node.
#[derive(Debug)]
pub struct ExtendedGraph<'a, G: WeightedGraph + ?Sized> {
    base: &'a G,
    source: NodeId,
    source_edges: Vec<(NodeId, EdgeWeights)>,
}

impl<'a, G: WeightedGraph + ?Sized> ExtendedGraph<'a, G> {
    pub fn new(base: &'a G) -> Self {
        let source_edges = base
            .node_ids()
            .map(|id| (id, EdgeWeights::new(0.0, 0.0)))
            .collect();

        ExtendedGraph {
            base,
            source: NodeId(base.slot_count()),
            source_edges,
        }
    }

    /// Id of the super-source, one past the last slot of the base graph
    pub fn source(&self) -> NodeId {
        self.source
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for ExtendedGraph<'_, G> {
    fn slot_count(&self) -> usize {
        self.base.slot_count() + 1
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.base.node_ids().chain(std::iter::once(self.source)))
    }

    fn contains_node(&self, id: NodeId) -> bool {
        id == self.source || self.base.contains_node(id)
    }

    fn is_building(&self, id: NodeId) -> bool {
        id != self.source && self.base.is_building(id)
    }

    fn outgoing_edges(&self, id: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeWeights)> + '_> {
        if id == self.source {
            Box::new(self.source_edges.iter().copied())
        } else {
            self.base.outgoing_edges(id)
        }
    }

    fn coordinates(&self, id: NodeId) -> Option<Coordinates> {
        if id == self.source {
            None
        } else {
            self.base.coordinates(id)
        }
    }
}

/// The original graph with every primary weight replaced by
/// `w(u, v) + h(u) - h(v)`. Secondary weights are passed through untouched.
#[derive(Debug)]
pub struct ReweightedGraph<'a, G: WeightedGraph + ?Sized> {
    base: &'a G,
    potentials: &'a [f64],
    strategy: WeightStrategy,
}

impl<'a, G: WeightedGraph + ?Sized> ReweightedGraph<'a, G> {
    /// `potentials` must be indexed by node id and finite for every live node
    pub fn new(base: &'a G, potentials: &'a [f64], strategy: WeightStrategy) -> Self {
        ReweightedGraph {
            base,
            potentials,
            strategy,
        }
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for ReweightedGraph<'_, G> {
    fn slot_count(&self) -> usize {
        self.base.slot_count()
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        self.base.node_ids()
    }

    fn node_count(&self) -> usize {
        self.base.node_count()
    }

    fn contains_node(&self, id: NodeId) -> bool {
        self.base.contains_node(id)
    }

    fn is_building(&self, id: NodeId) -> bool {
        self.base.is_building(id)
    }

    fn outgoing_edges(&self, id: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeWeights)> + '_> {
        let h_u = self.potentials[id.index()];
        Box::new(self.base.outgoing_edges(id).map(move |(v, weights)| {
            let reweighted = weights.primary(self.strategy) + h_u - self.potentials[v.index()];
            (v, weights.with_primary(self.strategy, reweighted))
        }))
    }

    fn coordinates(&self, id: NodeId) -> Option<Coordinates> {
        self.base.coordinates(id)
    }
}
