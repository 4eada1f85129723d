use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue over `f64` priorities used by Dijkstra and A*.
///
/// Entries are ordered by `(priority, vertex)`: among equal priorities the
/// smallest vertex pops first. With vertices being insertion-ordered node ids
/// this reproduces a first-minimum linear scan over the graph's nodes.
///
/// There is no decrease-key; callers push again on improvement and discard
/// stale entries when they pop.
#[derive(Debug)]
pub struct MinQueue<V>
where
    V: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, V)>>,
}

impl<V> MinQueue<V>
where
    V: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, vertex: V, priority: f64) {
        self.heap.push(Reverse((OrderedFloat(priority), vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, f64)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority.into_inner()))
    }
}

impl<V> Default for MinQueue<V>
where
    V: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
