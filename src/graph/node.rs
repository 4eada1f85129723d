use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::WeightStrategy;
use crate::graph::Graph;

/// Metres per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Metres per degree of longitude, fixed for a latitude of 22.365 degrees.
pub const METERS_PER_DEGREE_LON: f64 = 102_971.0;

/// Dense per-graph node identifier.
///
/// Ids are handed out in insertion order and never reused, so ordering by id
/// is ordering by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Slot index of this node in its graph
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a node of one specific graph.
///
/// A handle only resolves in the graph that issued it. Clones of a graph and
/// graphs derived from it issue their own handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) graph: u64,
    pub(crate) id: NodeId,
}

impl NodeHandle {
    /// Id of the node within its graph
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// A start, goal or edge endpoint given either by name or by handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Name(&'a str),
    Handle(NodeHandle),
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(name: &'a str) -> Self {
        NodeRef::Name(name)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(name: &'a String) -> Self {
        NodeRef::Name(name.as_str())
    }
}

impl From<NodeHandle> for NodeRef<'_> {
    fn from(handle: NodeHandle) -> Self {
        NodeRef::Handle(handle)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        NodeRef::Handle(node.handle)
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Name(name) => write!(f, "'{}'", name),
            NodeRef::Handle(handle) => write!(f, "handle {}", handle.id),
        }
    }
}

/// Latitude/longitude pair in degrees. Serialized as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }

    /// Planar distance in metres using fixed per-degree scale factors.
    ///
    /// Only meaningful for small maps near the calibration latitude; this is
    /// not a geodesic distance.
    pub fn planar_distance_m(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat) * METERS_PER_DEGREE_LAT;
        let d_lon = (other.lon - self.lon) * METERS_PER_DEGREE_LON;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Coordinates { lat, lon }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(coordinates: Coordinates) -> Self {
        (coordinates.lat, coordinates.lon)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lat, self.lon)
    }
}

/// Costs of one directed edge
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeWeights {
    pub distance: f64,
    pub time: f64,
}

impl EdgeWeights {
    pub fn new(distance: f64, time: f64) -> Self {
        EdgeWeights { distance, time }
    }

    /// Weight of the metric being optimised
    pub fn primary(&self, strategy: WeightStrategy) -> f64 {
        match strategy {
            WeightStrategy::Distance => self.distance,
            WeightStrategy::Time => self.time,
        }
    }

    /// Weight of the metric accumulated along the chosen path
    pub fn secondary(&self, strategy: WeightStrategy) -> f64 {
        self.primary(strategy.secondary())
    }

    /// Copy of these weights with the primary metric replaced
    pub fn with_primary(self, strategy: WeightStrategy, weight: f64) -> Self {
        match strategy {
            WeightStrategy::Distance => EdgeWeights { distance: weight, ..self },
            WeightStrategy::Time => EdgeWeights { time: weight, ..self },
        }
    }
}

/// A location on the map
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) handle: NodeHandle,
    name: String,
    coordinates: Coordinates,
    is_building: bool,
    /// Nested graph reserved for indoor navigation. Never traversed.
    subgraph: Option<Box<Graph>>,
    /// Outgoing edges in insertion order
    edges: Vec<(NodeId, EdgeWeights)>,
}

impl Node {
    pub(crate) fn new(
        handle: NodeHandle,
        name: String,
        coordinates: Coordinates,
        subgraph: Option<Graph>,
        is_building: bool,
    ) -> Self {
        Node {
            handle,
            name,
            coordinates,
            is_building,
            subgraph: subgraph.map(Box::new),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.handle.id
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Buildings may start or end a route but are never a through-hop
    pub fn is_building(&self) -> bool {
        self.is_building
    }

    pub fn subgraph(&self) -> Option<&Graph> {
        self.subgraph.as_deref()
    }

    /// Outgoing edges in the order they were first added
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, EdgeWeights)> + '_ {
        self.edges.iter().copied()
    }

    /// Weights of the edge towards `target`, if any
    pub fn edge_to(&self, target: NodeId) -> Option<EdgeWeights> {
        self.edges
            .iter()
            .find(|(neighbor, _)| *neighbor == target)
            .map(|(_, weights)| *weights)
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Adds an edge, or overwrites the weights of an existing one in place
    pub(crate) fn insert_edge(&mut self, target: NodeId, weights: EdgeWeights) {
        for edge in self.edges.iter_mut() {
            if edge.0 == target {
                edge.1 = weights;
                return;
            }
        }
        self.edges.push((target, weights));
    }

    pub(crate) fn remove_edge(&mut self, target: NodeId) -> bool {
        let len_before = self.edges.len();
        self.edges.retain(|(neighbor, _)| *neighbor != target);
        len_before > self.edges.len()
    }

    pub(crate) fn clear_edges(&mut self) {
        self.edges.clear();
    }

    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            name: self.name.clone(),
            coordinates: self.coordinates,
            is_building: self.is_building,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node({}, coords={}, building={})",
            self.name, self.coordinates, self.is_building
        )
    }
}

/// Serializable description of a node, as listed by `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub name: String,
    pub coordinates: Coordinates,
    pub is_building: bool,
}

/// Nearest node to a query point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosestNode {
    pub name: String,
    /// Planar distance in metres
    pub distance: f64,
}
