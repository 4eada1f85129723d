use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::algorithm::WeightStrategy;
use crate::graph::{NodeId, WeightedGraph};

/// Id-level outcome of one path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub primary: f64,
    pub secondary: f64,
    /// Node ids from start to target inclusive; empty when unreachable
    pub path: Vec<NodeId>,
}

impl PathRecord {
    pub fn unreachable() -> Self {
        PathRecord {
            primary: f64::INFINITY,
            secondary: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// A node paired with itself
    pub fn trivial(node: NodeId) -> Self {
        PathRecord {
            primary: 0.0,
            secondary: 0.0,
            path: vec![node],
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Record for `path` with both metrics summed edge by edge from the start.
    ///
    /// Every engine reports metrics this way, so equal paths carry bit-equal
    /// costs whatever order the engine combined partial costs in. A path with
    /// a missing edge is reported unreachable.
    pub fn along<G>(graph: &G, path: Vec<NodeId>, strategy: WeightStrategy) -> Self
    where
        G: WeightedGraph + ?Sized,
    {
        let mut primary = 0.0;
        let mut secondary = 0.0;

        for hop in path.windows(2) {
            match graph.edge_weights(hop[0], hop[1]) {
                Some(weights) => {
                    primary += weights.primary(strategy);
                    secondary += weights.secondary(strategy);
                }
                None => {
                    log::warn!("Path step {} -> {} has no edge", hop[0], hop[1]);
                    return PathRecord::unreachable();
                }
            }
        }

        if path.is_empty() {
            return PathRecord::unreachable();
        }

        PathRecord {
            primary,
            secondary,
            path,
        }
    }
}

/// A route between two named nodes with both metrics resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub distance: f64,
    pub time: f64,
    /// Serialized as `"A -> B -> C"`, or `""` when unreachable
    #[serde(serialize_with = "serialize_path")]
    pub path: Vec<String>,
}

impl Route {
    /// Builds a route from primary/secondary costs under `strategy`
    pub fn from_metrics(
        strategy: WeightStrategy,
        primary: f64,
        secondary: f64,
        path: Vec<String>,
    ) -> Self {
        match strategy {
            WeightStrategy::Distance => Route {
                distance: primary,
                time: secondary,
                path,
            },
            WeightStrategy::Time => Route {
                distance: secondary,
                time: primary,
                path,
            },
        }
    }

    pub fn unreachable() -> Self {
        Route {
            distance: f64::INFINITY,
            time: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn primary(&self, strategy: WeightStrategy) -> f64 {
        match strategy {
            WeightStrategy::Distance => self.distance,
            WeightStrategy::Time => self.time,
        }
    }

    pub fn secondary(&self, strategy: WeightStrategy) -> f64 {
        self.primary(strategy.secondary())
    }

    /// Node names joined with `" -> "`
    pub fn path_string(&self) -> String {
        self.path.join(" -> ")
    }
}

fn serialize_path<S: Serializer>(path: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.join(" -> "))
}

/// Routes from one source, keyed by target name
pub type Routes = HashMap<String, Route>;

/// Routes for every source, keyed by source name then target name
pub type AllPairs = HashMap<String, Routes>;
