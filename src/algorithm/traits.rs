use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::algorithm::route::PathRecord;
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// Which edge cost a query optimises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightStrategy {
    #[default]
    Distance,
    Time,
}

impl WeightStrategy {
    /// The metric that is accumulated, not optimised
    pub fn secondary(self) -> Self {
        match self {
            WeightStrategy::Distance => WeightStrategy::Time,
            WeightStrategy::Time => WeightStrategy::Distance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightStrategy::Distance => "distance",
            WeightStrategy::Time => "time",
        }
    }
}

impl fmt::Display for WeightStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "distance" => Ok(WeightStrategy::Distance),
            "time" => Ok(WeightStrategy::Time),
            other => Err(Error::InvalidArgumentType(format!(
                "weight strategy must be 'distance' or 'time', got '{}'",
                other
            ))),
        }
    }
}

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    /// Source vertex ID
    pub source: NodeId,

    /// Optimised cost from the source, `+inf` when unreached. Indexed by node id.
    pub primary: Vec<f64>,

    /// Other metric summed along the same path. Indexed by node id.
    pub secondary: Vec<f64>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// Everything unreached except the source, which sits at `0/0`
    pub fn new(slot_count: usize, source: NodeId) -> Self {
        let mut tree = ShortestPathTree {
            source,
            primary: vec![f64::INFINITY; slot_count],
            secondary: vec![f64::INFINITY; slot_count],
            predecessors: vec![None; slot_count],
        };
        tree.primary[source.index()] = 0.0;
        tree.secondary[source.index()] = 0.0;
        tree
    }

    pub fn is_reachable(&self, target: NodeId) -> bool {
        self.primary
            .get(target.index())
            .is_some_and(|cost| *cost < f64::INFINITY)
    }

    /// Get the path from the source to `target` as a sequence of node ids
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in path reconstruction at node {}", current);
                return None;
            }

            path.push(current);
            match self.predecessors[current.index()] {
                Some(pred) => current = pred,
                // No predecessor but not the source: the chain is broken
                None => return None,
            }
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }

    /// One record per live node other than the source.
    ///
    /// Metrics are summed from `graph`'s edge weights along each path, so
    /// passing the original graph undoes any reweighting the tree was
    /// computed on.
    pub fn records<G>(&self, graph: &G, strategy: WeightStrategy) -> BTreeMap<NodeId, PathRecord>
    where
        G: WeightedGraph + ?Sized,
    {
        graph
            .node_ids()
            .filter(|target| *target != self.source)
            .map(|target| {
                let record = match self.path_to(target) {
                    Some(path) => PathRecord::along(graph, path, strategy),
                    None => PathRecord::unreachable(),
                };
                (target, record)
            })
            .collect()
    }
}

/// Id-level all-pairs result: source -> target -> record
pub type PathTable = BTreeMap<NodeId, BTreeMap<NodeId, PathRecord>>;

/// Trait for single-source shortest path algorithms
pub trait SingleSourceAlgorithm<G>
where
    G: WeightedGraph + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: NodeId,
        strategy: WeightStrategy,
    ) -> Result<ShortestPathTree>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Trait for algorithms producing a route for every ordered pair of nodes
pub trait AllPairsAlgorithm<G>
where
    G: WeightedGraph + ?Sized,
{
    fn compute_all_pairs(&self, graph: &G, strategy: WeightStrategy) -> Result<PathTable>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
