use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::algorithm::route::PathRecord;
use crate::algorithm::{AllPairsAlgorithm, PathTable, ShortestPathTree, WeightStrategy};
use crate::data_structures::MinQueue;
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// A* point-to-point search guided by planar distance to the goal in metres.
///
/// The heuristic ignores the weight strategy. It never overestimates when
/// optimising distance on a map whose edge distances are at least the planar
/// distance between their endpoints; for time it is only admissible if travel
/// is no faster than one metre per time unit, so time-optimal results are not
/// guaranteed.
///
/// The open set pops the smallest `f = g + h`; ties go to the node inserted
/// into the graph first.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }

    /// Best path from `start` to `goal`. Returns as soon as the goal is popped.
    pub fn search<G>(
        &self,
        graph: &G,
        start: NodeId,
        goal: NodeId,
        strategy: WeightStrategy,
    ) -> Result<PathRecord>
    where
        G: WeightedGraph + ?Sized,
    {
        if !graph.contains_node(start) {
            return Err(Error::NodeNotFound(format!("Start node {} not found", start)));
        }
        if !graph.contains_node(goal) {
            return Err(Error::NodeNotFound(format!("Goal node {} not found", goal)));
        }

        let goal_coordinates = graph.coordinates(goal);
        let heuristic = |node: NodeId| match (graph.coordinates(node), goal_coordinates) {
            (Some(from), Some(to)) => from.planar_distance_m(&to),
            _ => 0.0,
        };

        let slots = graph.slot_count();
        // g-scores, secondary scores and predecessors
        let mut scores = ShortestPathTree::new(slots, start);
        let mut f_score = vec![f64::INFINITY; slots];
        let mut in_open = vec![false; slots];

        let mut open = MinQueue::new();
        f_score[start.index()] = heuristic(start);
        in_open[start.index()] = true;
        open.push(start, f_score[start.index()]);

        while let Some((current, f_current)) = open.pop() {
            if !in_open[current.index()] || f_current > f_score[current.index()] {
                continue;
            }

            if current == goal {
                let path = scores.path_to(goal).unwrap_or_default();
                return Ok(PathRecord::along(graph, path, strategy));
            }

            in_open[current.index()] = false;

            if graph.is_building(current) && current != start && current != goal {
                continue;
            }

            let g_current = scores.primary[current.index()];
            let secondary_current = scores.secondary[current.index()];

            for (neighbor, weights) in graph.outgoing_edges(current) {
                let tentative = g_current + weights.primary(strategy);
                if tentative < scores.primary[neighbor.index()] {
                    let i = neighbor.index();
                    scores.primary[i] = tentative;
                    scores.secondary[i] = secondary_current + weights.secondary(strategy);
                    scores.predecessors[i] = Some(current);
                    f_score[i] = tentative + heuristic(neighbor);
                    in_open[i] = true;
                    open.push(neighbor, f_score[i]);
                }
            }
        }

        Ok(PathRecord::unreachable())
    }
}

impl<G> AllPairsAlgorithm<G> for AStar
where
    G: WeightedGraph + Sync + ?Sized,
{
    fn name(&self) -> &'static str {
        "A*"
    }

    /// Runs A* for every ordered pair. A node paired with itself is `0/0`
    /// without a search.
    fn compute_all_pairs(&self, graph: &G, strategy: WeightStrategy) -> Result<PathTable> {
        let nodes: Vec<NodeId> = graph.node_ids().collect();

        nodes
            .par_iter()
            .map(|&start| {
                let mut row = BTreeMap::new();
                for &goal in &nodes {
                    let record = if start == goal {
                        PathRecord::trivial(start)
                    } else {
                        self.search(graph, start, goal, strategy)?
                    };
                    row.insert(goal, record);
                }
                Ok((start, row))
            })
            .collect()
    }
}
