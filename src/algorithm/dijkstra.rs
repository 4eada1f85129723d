use crate::algorithm::{ShortestPathTree, SingleSourceAlgorithm, WeightStrategy};
use crate::data_structures::MinQueue;
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// Dijkstra's algorithm over non-negative weights with building avoidance.
///
/// The next node settled is the unvisited node with the smallest tentative
/// primary cost, ties going to the node inserted first. A building other than
/// the source is settled but its outgoing edges are never relaxed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> SingleSourceAlgorithm<G> for Dijkstra
where
    G: WeightedGraph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: NodeId,
        strategy: WeightStrategy,
    ) -> Result<ShortestPathTree> {
        if !graph.contains_node(source) {
            return Err(Error::NodeNotFound(format!("Start node {} not found", source)));
        }

        let mut tree = ShortestPathTree::new(graph.slot_count(), source);
        let mut visited = vec![false; graph.slot_count()];

        let mut queue = MinQueue::new();
        queue.push(source, 0.0);

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was settled or has since improved
            if visited[u.index()] || dist_u > tree.primary[u.index()] {
                continue;
            }
            visited[u.index()] = true;

            if u != source && graph.is_building(u) {
                continue;
            }

            let primary_u = tree.primary[u.index()];
            let secondary_u = tree.secondary[u.index()];

            for (v, weights) in graph.outgoing_edges(u) {
                if visited[v.index()] {
                    continue;
                }

                let tentative = primary_u + weights.primary(strategy);
                if tentative < tree.primary[v.index()] {
                    tree.primary[v.index()] = tentative;
                    tree.secondary[v.index()] = secondary_u + weights.secondary(strategy);
                    tree.predecessors[v.index()] = Some(u);
                    queue.push(v, tentative);
                }
            }
        }

        Ok(tree)
    }
}
