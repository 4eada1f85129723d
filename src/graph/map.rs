use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::graph::node::NodeSummary;
use crate::graph::traits::WeightedGraph;
use crate::graph::{Coordinates, EdgeWeights, Node, NodeHandle, NodeId, NodeRef};
use crate::{Error, Result};

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(1);

fn next_graph_tag() -> u64 {
    NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed)
}

/// A campus map: named nodes in insertion order with dual-weighted directed edges
#[derive(Debug)]
pub struct Graph {
    name: String,

    /// Identity of this graph; every handle it issues carries it
    tag: u64,

    /// Node storage indexed by `NodeId`. Deleted nodes leave an empty slot.
    slots: Vec<Option<Node>>,

    /// Name -> id for live nodes
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Creates a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Graph {
            name: name.into(),
            tag: next_graph_tag(),
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new graph with room for the specified number of nodes
    pub fn with_capacity(name: impl Into<String>, nodes: usize) -> Self {
        Graph {
            name: name.into(),
            tag: next_graph_tag(),
            slots: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of live nodes
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes().map(Node::degree).sum()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Adds a node and returns its handle.
    ///
    /// Names are unique; adding an existing name fails with `DuplicateNode`.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
        subgraph: Option<Graph>,
        is_building: bool,
    ) -> Result<NodeHandle> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateNode(name));
        }

        let handle = NodeHandle {
            graph: self.tag,
            id: NodeId(self.slots.len()),
        };
        self.index.insert(name.clone(), handle.id);
        self.slots
            .push(Some(Node::new(handle, name, coordinates, subgraph, is_building)));

        Ok(handle)
    }

    /// Adds an edge between two named nodes.
    ///
    /// A bidirectional edge is stored as two independent directed records. An
    /// existing edge has its weights overwritten.
    pub fn add_edge(
        &mut self,
        name1: &str,
        name2: &str,
        distance: f64,
        time: f64,
        bidirectional: bool,
    ) -> Result<()> {
        let (from, to) = match (self.index.get(name1), self.index.get(name2)) {
            (Some(&from), Some(&to)) => (from, to),
            _ => {
                return Err(Error::NodeNotFound(format!(
                    "add_edge: one of nodes not found: {}, {}",
                    name1, name2
                )))
            }
        };

        let weights = EdgeWeights::new(distance, time);
        self.insert_edge(from, to, weights);
        if bidirectional {
            self.insert_edge(to, from, weights);
        }

        Ok(())
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId, weights: EdgeWeights) {
        if let Some(Some(node)) = self.slots.get_mut(from.index()) {
            node.insert_edge(to, weights);
        }
    }

    /// Removes the directed edge `from -> to`.
    ///
    /// Returns true if the edge existed. Unknown endpoints yield false.
    pub fn delete_edge<'a, 'b>(
        &mut self,
        from: impl Into<NodeRef<'a>>,
        to: impl Into<NodeRef<'b>>,
    ) -> bool {
        let (Ok(from), Ok(to)) = (self.resolve(from), self.resolve(to)) else {
            return false;
        };

        match self.slots.get_mut(from.index()) {
            Some(Some(node)) => node.remove_edge(to),
            _ => false,
        }
    }

    /// Removes a node and every edge that points at it.
    ///
    /// Returns true if the node existed.
    pub fn delete_node<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> bool {
        let Ok(id) = self.resolve(node) else {
            return false;
        };

        for other in self.slots.iter_mut().flatten() {
            other.remove_edge(id);
        }

        match self.slots[id.index()].take() {
            Some(mut removed) => {
                removed.clear_edges();
                self.index.remove(removed.name());
                true
            }
            None => false,
        }
    }

    /// Resolves a name or handle to a live node id of this graph
    pub fn resolve<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<NodeId> {
        let node = node.into();
        let id = match node {
            NodeRef::Name(name) => self.index.get(name).copied(),
            NodeRef::Handle(handle) => Some(handle.id).filter(|id| {
                handle.graph == self.tag && self.node_by_id(*id).is_some()
            }),
        };

        id.ok_or_else(|| Error::NodeNotFound(format!("Node {} not found", node)))
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index.get(name).and_then(|id| self.node_by_id(*id))
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Live nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter().flatten()
    }

    /// Summaries of every node, in insertion order
    pub fn all_nodes(&self) -> Vec<NodeSummary> {
        self.nodes().map(Node::summary).collect()
    }

    /// Name of a live node
    pub(crate) fn name_of(&self, id: NodeId) -> &str {
        self.node_by_id(id).map_or("", Node::name)
    }
}

impl Clone for Graph {
    /// The clone is a distinct graph: it gets a new identity and handles issued
    /// by the original do not resolve in it.
    fn clone(&self) -> Self {
        let tag = next_graph_tag();
        let mut slots = self.slots.clone();
        for node in slots.iter_mut().flatten() {
            node.handle.graph = tag;
        }

        Graph {
            name: self.name.clone(),
            tag,
            slots,
            index: self.index.clone(),
        }
    }
}

impl WeightedGraph for Graph {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.nodes().map(Node::id))
    }

    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn contains_node(&self, id: NodeId) -> bool {
        self.node_by_id(id).is_some()
    }

    fn is_building(&self, id: NodeId) -> bool {
        self.node_by_id(id).is_some_and(Node::is_building)
    }

    fn outgoing_edges(&self, id: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeWeights)> + '_> {
        if let Some(node) = self.node_by_id(id) {
            Box::new(node.edges())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weights(&self, from: NodeId, to: NodeId) -> Option<EdgeWeights> {
        self.node_by_id(from).and_then(|node| node.edge_to(to))
    }

    fn coordinates(&self, id: NodeId) -> Option<Coordinates> {
        self.node_by_id(id).map(Node::coordinates)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph({}):", self.name)?;
        for node in self.nodes() {
            let neighbors: Vec<String> = node
                .edges()
                .map(|(neighbor, weights)| {
                    format!(
                        "{}: distance = {}, time = {}",
                        self.name_of(neighbor),
                        weights.distance,
                        weights.time
                    )
                })
                .collect();

            write!(f, "    {} {}", node.name(), node.coordinates())?;
            if !neighbors.is_empty() {
                write!(f, " -> {}", neighbors.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_slots_are_not_reused() {
        let mut graph = Graph::new("slots");
        let a = graph.add_node("A", Coordinates::default(), None, false).unwrap();
        graph.add_node("B", Coordinates::default(), None, false).unwrap();
        assert!(graph.delete_node(a));

        let c = graph.add_node("C", Coordinates::default(), None, false).unwrap();
        assert_eq!(c.id(), NodeId(2));
        assert_eq!(graph.slot_count(), 3);
        let order: Vec<&str> = graph.nodes().map(Node::name).collect();
        assert_eq!(order, vec!["B", "C"]);
    }

    #[test]
    fn test_display_lists_adjacency() {
        let mut graph = Graph::new("tiny");
        graph.add_node("A", Coordinates::new(1.0, 2.0), None, false).unwrap();
        graph.add_node("B", Coordinates::new(3.0, 4.0), None, false).unwrap();
        graph.add_edge("A", "B", 5.0, 6.0, false).unwrap();

        let rendered = graph.to_string();
        assert!(rendered.starts_with("Graph(tiny):"));
        assert!(rendered.contains("A [1, 2] -> B: distance = 5, time = 6"));
    }
}
