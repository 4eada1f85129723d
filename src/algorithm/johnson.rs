use rayon::prelude::*;

use crate::algorithm::bellman_ford::{bellman_ford_base, BuildingRule};
use crate::algorithm::cancel::{self, CancellationToken};
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{AllPairsAlgorithm, PathTable, SingleSourceAlgorithm, WeightStrategy};
use crate::graph::reweighted::{ExtendedGraph, ReweightedGraph};
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// Johnson's all-pairs shortest paths: Bellman-Ford potentials from a virtual
/// super-source, then Dijkstra from every node on non-negatively reweighted
/// edges.
///
/// Supports negative edges; fails with [`Error::NegativeCycleDetected`] when a
/// negative cycle exists. Reweighting only steers the search: both metrics of
/// every route are the plain sums of the original weights along its path.
#[derive(Debug, Default, Clone)]
pub struct Johnson {
    cancellation: Option<CancellationToken>,
}

impl Johnson {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `token` before the potential pass and before each source
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Potentials `h(v)`, indexed by node id of `graph`.
    ///
    /// The relaxation traverses buildings: potentials must satisfy
    /// `h(v) <= h(u) + w(u, v)` on every edge, including edges leaving a
    /// building, or reweighted edges could come out negative.
    pub fn potentials<G>(&self, graph: &G, strategy: WeightStrategy) -> Result<Vec<f64>>
    where
        G: WeightedGraph + ?Sized,
    {
        let extended = ExtendedGraph::new(graph);
        let tree = bellman_ford_base(
            &extended,
            extended.source(),
            strategy,
            BuildingRule::TraverseAll,
        )?;
        let h = tree.primary;

        for u in extended.node_ids() {
            let h_u = h[u.index()];
            if h_u == f64::INFINITY {
                continue;
            }
            for (v, weights) in extended.outgoing_edges(u) {
                if h_u + weights.primary(strategy) < h[v.index()] {
                    log::debug!("Edge {} -> {} still relaxes after Bellman-Ford", u, v);
                    return Err(Error::NegativeCycleDetected);
                }
            }
        }

        let mut potentials = h;
        potentials.truncate(graph.slot_count());
        Ok(potentials)
    }
}

impl<G> AllPairsAlgorithm<G> for Johnson
where
    G: WeightedGraph + Sync + ?Sized,
{
    fn name(&self) -> &'static str {
        "Johnson"
    }

    fn compute_all_pairs(&self, graph: &G, strategy: WeightStrategy) -> Result<PathTable> {
        cancel::check(self.cancellation.as_ref())?;

        let h = self.potentials(graph, strategy)?;
        let reweighted = ReweightedGraph::new(graph, &h, strategy);
        let sources: Vec<NodeId> = graph.node_ids().collect();

        log::debug!("Johnson potentials ready, sweeping {} sources", sources.len());

        sources
            .par_iter()
            .map(|&source| {
                cancel::check(self.cancellation.as_ref())?;

                let tree = Dijkstra::new().compute_shortest_paths(&reweighted, source, strategy)?;
                // Metrics come from the original weights, not the reweighted ones
                Ok((source, tree.records(graph, strategy)))
            })
            .collect()
    }
}
