//! Name-level routing operations on [`Graph`].
//!
//! These wrap the id-level engines: they resolve names and handles, run the
//! engine, and translate ids back to names with `distance`/`time` resolved
//! from the primary and secondary metrics.

use std::collections::BTreeMap;

use crate::algorithm::sweep::Sweep;
use crate::algorithm::{
    AStar, AllPairs, AllPairsAlgorithm, BellmanFord, Dijkstra, FloydWarshall, Johnson, PathRecord,
    PathTable, Route, Routes, SingleSourceAlgorithm, WeightStrategy,
};
use crate::graph::{ClosestNode, Coordinates, Graph, NodeId, NodeRef};
use crate::Result;

impl Graph {
    /// Dijkstra routes from `start` to every other node
    pub fn dijkstra<'a>(
        &self,
        start: impl Into<NodeRef<'a>>,
        strategy: WeightStrategy,
    ) -> Result<Routes> {
        self.single_source(&Dijkstra::new(), start, strategy)
    }

    /// Bellman-Ford routes from `start` to every other node
    pub fn bellman_ford<'a>(
        &self,
        start: impl Into<NodeRef<'a>>,
        strategy: WeightStrategy,
    ) -> Result<Routes> {
        self.single_source(&BellmanFord::new(), start, strategy)
    }

    /// Dijkstra from every node
    pub fn dijkstra_all(&self, strategy: WeightStrategy) -> Result<AllPairs> {
        self.all_pairs(&Sweep::new(Dijkstra::new()), strategy)
    }

    /// Bellman-Ford from every node
    pub fn bellman_ford_all(&self, strategy: WeightStrategy) -> Result<AllPairs> {
        self.all_pairs(&Sweep::new(BellmanFord::new()), strategy)
    }

    pub fn floyd_warshall(&self, strategy: WeightStrategy) -> Result<AllPairs> {
        self.all_pairs(&FloydWarshall::new(), strategy)
    }

    /// Johnson's algorithm. Fails with `NegativeCycleDetected` on a negative cycle.
    pub fn johnson(&self, strategy: WeightStrategy) -> Result<AllPairs> {
        self.all_pairs(&Johnson::new(), strategy)
    }

    /// A* from `start` to `goal`
    pub fn a_star<'a, 'b>(
        &self,
        start: impl Into<NodeRef<'a>>,
        goal: impl Into<NodeRef<'b>>,
        strategy: WeightStrategy,
    ) -> Result<Route> {
        let start = self.resolve(start)?;
        let goal = self.resolve(goal)?;
        let record = AStar::new().search(self, start, goal, strategy)?;
        Ok(self.route(record, strategy))
    }

    /// A* for every ordered pair, each node included as its own `0/0` target
    pub fn a_star_all(&self, strategy: WeightStrategy) -> Result<AllPairs> {
        self.all_pairs(&AStar::new(), strategy)
    }

    /// Runs any single-source engine and names its results
    pub fn single_source<'a, A>(
        &self,
        algorithm: &A,
        start: impl Into<NodeRef<'a>>,
        strategy: WeightStrategy,
    ) -> Result<Routes>
    where
        A: SingleSourceAlgorithm<Graph>,
    {
        let source = self.resolve(start)?;
        let tree = algorithm.compute_shortest_paths(self, source, strategy)?;
        Ok(self.routes(tree.records(self, strategy), strategy))
    }

    /// Runs any all-pairs engine (e.g. one carrying a cancellation token) and
    /// names its results
    pub fn all_pairs<A>(&self, algorithm: &A, strategy: WeightStrategy) -> Result<AllPairs>
    where
        A: AllPairsAlgorithm<Graph>,
    {
        log::info!(
            "Computing all-pairs routes on '{}' with {} by {}",
            self.name(),
            algorithm.name(),
            strategy
        );
        let table = algorithm.compute_all_pairs(self, strategy)?;
        Ok(self.name_table(table, strategy))
    }

    /// Nearest node to `coordinates` by planar distance; first one wins ties
    pub fn find_closest_node(&self, coordinates: Coordinates) -> Option<ClosestNode> {
        let mut closest: Option<ClosestNode> = None;

        for node in self.nodes() {
            let distance = coordinates.planar_distance_m(&node.coordinates());
            if closest.as_ref().map_or(true, |best| distance < best.distance) {
                closest = Some(ClosestNode {
                    name: node.name().to_string(),
                    distance,
                });
            }
        }

        closest
    }

    fn route(&self, record: PathRecord, strategy: WeightStrategy) -> Route {
        if !record.is_reachable() {
            return Route::unreachable();
        }
        let path = record
            .path
            .iter()
            .map(|id| self.name_of(*id).to_string())
            .collect();
        Route::from_metrics(strategy, record.primary, record.secondary, path)
    }

    fn routes(&self, records: BTreeMap<NodeId, PathRecord>, strategy: WeightStrategy) -> Routes {
        records
            .into_iter()
            .map(|(target, record)| (self.name_of(target).to_string(), self.route(record, strategy)))
            .collect()
    }

    fn name_table(&self, table: PathTable, strategy: WeightStrategy) -> AllPairs {
        table
            .into_iter()
            .map(|(source, row)| (self.name_of(source).to_string(), self.routes(row, strategy)))
            .collect()
    }
}
