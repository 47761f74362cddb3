//! FIFO frontier with first-enqueue visited marking and parent tracking.

use std::collections::VecDeque;
use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Breadth-first frontier.
///
/// Maintains:
/// - A `VecDeque` of nodes awaiting expansion
/// - A visited set, filled when a node is first enqueued (never shrinks)
/// - A parent map from each discovered node to its predecessor
pub struct Frontier<N> {
    queue: VecDeque<N>,
    visited: HashSet<N>,
    parents: HashMap<N, N>,
    high_water: usize,
}

impl<N: Clone + Eq + Hash> Frontier<N> {
    /// Create a frontier holding only `start`, already marked visited.
    pub fn seeded(start: N) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self {
            queue,
            visited,
            parents: HashMap::new(),
            high_water: 1,
        }
    }

    /// Enqueue `node` reached from `parent`.
    ///
    /// Returns `false` if the node was already visited (node not added).
    pub fn offer(&mut self, node: N, parent: &N) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.parents.insert(node.clone(), parent.clone());
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Dequeue the oldest node.
    pub fn pop(&mut self) -> Option<N> {
        self.queue.pop_front()
    }

    pub fn parents(&self) -> &HashMap<N, N> {
        &self.parents
    }

    pub fn is_visited(&self, node: &N) -> bool {
        self.visited.contains(node)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of queue length.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
