use std::collections::BTreeMap;

use crate::algorithm::cancel::{self, CancellationToken};
use crate::algorithm::route::PathRecord;
use crate::algorithm::{AllPairsAlgorithm, PathTable, WeightStrategy};
use crate::graph::{NodeId, WeightedGraph};
use crate::Result;

/// Floyd-Warshall all-pairs shortest paths, O(V^3).
///
/// A building is never used as an intermediate node for any pair.
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall {
    cancellation: Option<CancellationToken>,
}

impl FloydWarshall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `token` before each intermediate node
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Dense `n x n` primary-cost/next-hop tables over live nodes in insertion order
struct Matrices {
    n: usize,
    primary: Vec<f64>,
    next_hop: Vec<Option<usize>>,
}

impl Matrices {
    fn at(&self, i: usize, j: usize) -> usize {
        i * self.n + j
    }

    /// Walks `next_hop` from `i` to `j`. Empty if no hop is recorded.
    fn path(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        self.next_hop[self.at(i, j)]?;

        let mut path = vec![i];
        let mut current = i;
        while current != j {
            current = self.next_hop[self.at(current, j)]?;
            path.push(current);
            // Only a negative cycle can make the walk longer than n
            if path.len() > self.n {
                log::warn!("Floyd-Warshall next-hop walk exceeded {} nodes", self.n);
                return None;
            }
        }
        Some(path)
    }
}

impl<G> AllPairsAlgorithm<G> for FloydWarshall
where
    G: WeightedGraph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, graph: &G, strategy: WeightStrategy) -> Result<PathTable> {
        let ids: Vec<NodeId> = graph.node_ids().collect();
        let n = ids.len();

        let mut position = vec![usize::MAX; graph.slot_count()];
        for (i, id) in ids.iter().enumerate() {
            position[id.index()] = i;
        }

        let mut m = Matrices {
            n,
            primary: vec![f64::INFINITY; n * n],
            next_hop: vec![None; n * n],
        };

        for i in 0..n {
            let at = m.at(i, i);
            m.primary[at] = 0.0;
        }

        for (i, &u) in ids.iter().enumerate() {
            for (v, weights) in graph.outgoing_edges(u) {
                let j = position[v.index()];
                let at = m.at(i, j);
                m.primary[at] = weights.primary(strategy);
                m.next_hop[at] = Some(j);
            }
        }

        for k in 0..n {
            cancel::check(self.cancellation.as_ref())?;

            if graph.is_building(ids[k]) {
                continue;
            }

            for i in 0..n {
                let ik = m.at(i, k);
                let primary_ik = m.primary[ik];
                if primary_ik == f64::INFINITY {
                    continue;
                }
                let hop_ik = m.next_hop[ik];

                for j in 0..n {
                    let kj = m.at(k, j);
                    let ij = m.at(i, j);
                    let candidate = primary_ik + m.primary[kj];
                    if candidate < m.primary[ij] {
                        m.primary[ij] = candidate;
                        m.next_hop[ij] = hop_ik;
                    }
                }
            }
        }

        log::debug!("Floyd-Warshall finished over {} nodes", n);

        let mut table = PathTable::new();
        for (i, &source) in ids.iter().enumerate() {
            let mut row = BTreeMap::new();
            for (j, &target) in ids.iter().enumerate() {
                if i == j {
                    continue;
                }
                // Matrix sums group additions as (i..k) + (k..j); report the
                // edge-by-edge sum instead
                let record = match m.path(i, j) {
                    Some(path) => {
                        let path = path.into_iter().map(|p| ids[p]).collect();
                        PathRecord::along(graph, path, strategy)
                    }
                    None => PathRecord::unreachable(),
                };
                row.insert(target, record);
            }
            table.insert(source, row);
        }

        Ok(table)
    }
}
