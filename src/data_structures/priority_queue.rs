use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-heap over `(priority, vertex)` pairs for Dijkstra-style expansion
///
/// Ties in priority resolve by vertex order, so pop order is fully
/// deterministic. Decrease-key is handled the usual lazy way: push the
/// improved pair and let consumers skip stale pops.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an entry with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|&Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
