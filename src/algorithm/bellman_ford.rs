use crate::algorithm::{ShortestPathTree, SingleSourceAlgorithm, WeightStrategy};
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// Whether a relaxation pass may expand buildings other than the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingRule {
    /// Buildings are route endpoints only
    EndpointsOnly,
    /// Every node is expanded; used for Johnson potentials
    TraverseAll,
}

/// Bellman-Ford relaxation shared by [`BellmanFord`] and Johnson's algorithm.
///
/// Runs at most `V - 1` passes over every directed edge, in node then edge
/// insertion order, and stops early at the first pass without an update.
/// Negative cycles are not detected: on such a graph the result after `V - 1`
/// passes is simply whatever the relaxation reached.
pub fn bellman_ford_base<G>(
    graph: &G,
    source: NodeId,
    strategy: WeightStrategy,
    rule: BuildingRule,
) -> Result<ShortestPathTree>
where
    G: WeightedGraph + ?Sized,
{
    if !graph.contains_node(source) {
        return Err(Error::NodeNotFound(format!("Start node {} not found", source)));
    }

    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let mut tree = ShortestPathTree::new(graph.slot_count(), source);

    for pass in 0..nodes.len().saturating_sub(1) {
        let mut updated = false;

        for &u in &nodes {
            if rule == BuildingRule::EndpointsOnly && u != source && graph.is_building(u) {
                continue;
            }

            let primary_u = tree.primary[u.index()];
            if primary_u == f64::INFINITY {
                continue;
            }
            let secondary_u = tree.secondary[u.index()];

            for (v, weights) in graph.outgoing_edges(u) {
                let candidate = primary_u + weights.primary(strategy);
                if candidate < tree.primary[v.index()] {
                    tree.primary[v.index()] = candidate;
                    tree.secondary[v.index()] = secondary_u + weights.secondary(strategy);
                    tree.predecessors[v.index()] = Some(u);
                    updated = true;
                }
            }
        }

        if !updated {
            log::debug!("Bellman-Ford from {} converged after {} passes", source, pass + 1);
            break;
        }
    }

    Ok(tree)
}

/// Bellman-Ford single-source shortest paths. Tolerates negative edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<G> SingleSourceAlgorithm<G> for BellmanFord
where
    G: WeightedGraph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: NodeId,
        strategy: WeightStrategy,
    ) -> Result<ShortestPathTree> {
        bellman_ford_base(graph, source, strategy, BuildingRule::EndpointsOnly)
    }
}
