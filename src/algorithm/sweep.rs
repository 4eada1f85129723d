use rayon::prelude::*;

use crate::algorithm::{AllPairsAlgorithm, PathTable, SingleSourceAlgorithm, WeightStrategy};
use crate::graph::{NodeId, WeightedGraph};
use crate::Result;

/// All-pairs by running a single-source algorithm from every node.
///
/// Sources are independent and run in parallel on the rayon pool. Every node,
/// building or not, is used as a source.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sweep<A> {
    algorithm: A,
}

impl<A> Sweep<A> {
    pub fn new(algorithm: A) -> Self {
        Sweep { algorithm }
    }
}

impl<A, G> AllPairsAlgorithm<G> for Sweep<A>
where
    A: SingleSourceAlgorithm<G> + Sync,
    G: WeightedGraph + Sync + ?Sized,
{
    fn name(&self) -> &'static str {
        <A as SingleSourceAlgorithm<G>>::name(&self.algorithm)
    }

    fn compute_all_pairs(&self, graph: &G, strategy: WeightStrategy) -> Result<PathTable> {
        let sources: Vec<NodeId> = graph.node_ids().collect();
        log::debug!(
            "{} sweep over {} sources ({})",
            <A as SingleSourceAlgorithm<G>>::name(&self.algorithm),
            sources.len(),
            strategy
        );

        sources
            .par_iter()
            .map(|&source| {
                let tree = self.algorithm.compute_shortest_paths(graph, source, strategy)?;
                Ok((source, tree.records(graph, strategy)))
            })
            .collect()
    }
}
