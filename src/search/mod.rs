//! # Shortest paths over implicit graphs
//!
//! The graph is never materialized. A [`NeighborFunction`] answers
//! "which nodes are one edge away from this one?" on demand, so the search
//! works on infinite or procedurally generated graphs as well.
//!
//! ```rust
//! use algokit::search::{search, grid::four_neighbors};
//!
//! let path = search((0, 0), (2, 2), four_neighbors).into_path().unwrap();
//! assert_eq!(path.len(), 4);
//! ```

pub mod frontier;
pub mod grid;

use std::hash::Hash;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::model::Path;
use frontier::Frontier;

// ============================================================================
// NeighborFunction
// ============================================================================

/// Defines an implicit graph by listing the neighbors of a node.
///
/// Must be side-effect-free and return a finite neighbor list. Any closure
/// `Fn(&N) -> impl IntoIterator<Item = N>` qualifies.
pub trait NeighborFunction<N> {
    type Neighbors: IntoIterator<Item = N>;

    fn neighbors(&self, node: &N) -> Self::Neighbors;
}

impl<N, F, I> NeighborFunction<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Neighbors = I;

    fn neighbors(&self, node: &N) -> I {
        self(node)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a search. `NoPath` is an ordinary answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize + Clone",
    deserialize = "N: Deserialize<'de>"
))]
pub enum SearchOutcome<N> {
    /// A shortest path from start to end.
    Found(Path<N>),
    /// The frontier drained without reaching the end node.
    NoPath,
    /// A bounded search stopped after `expanded` expansions.
    LimitReached { expanded: u64 },
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Breadth-first search from `start` to `end`.
///
/// Returns a path with the fewest edges. Among equally short paths the one
/// discovered first in neighbor output order wins. `start == end` yields
/// the single-node path. Runs until the frontier drains, so an unreachable
/// `end` in an infinite graph never returns; use [`search_bounded`] there.
pub fn search<N, F>(start: N, end: N, neighbors: F) -> SearchOutcome<N>
where
    N: Clone + Eq + Hash,
    F: NeighborFunction<N>,
{
    breadth_first(start, end, &neighbors, None)
}

/// [`search`] with an expansion cap taken from `config`.
pub fn search_bounded<N, F>(start: N, end: N, neighbors: F, config: &SearchConfig) -> SearchOutcome<N>
where
    N: Clone + Eq + Hash,
    F: NeighborFunction<N>,
{
    breadth_first(start, end, &neighbors, config.max_expansions)
}

fn breadth_first<N, F>(start: N, end: N, neighbors: &F, max_expansions: Option<u64>) -> SearchOutcome<N>
where
    N: Clone + Eq + Hash,
    F: NeighborFunction<N>,
{
    let mut frontier = Frontier::seeded(start.clone());
    let mut expanded: u64 = 0;

    while let Some(current) = frontier.pop() {
        // Checked at dequeue time, so start == end returns before expanding.
        if current == end {
            debug!(
                expanded,
                visited = frontier.visited_count(),
                frontier_high_water = frontier.high_water(),
                "search reached end node"
            );
            return SearchOutcome::Found(reconstruct_path(&start, current, frontier.parents()));
        }

        if max_expansions.is_some_and(|limit| expanded >= limit) {
            warn!(expanded, visited = frontier.visited_count(), "search expansion limit reached");
            return SearchOutcome::LimitReached { expanded };
        }

        expanded += 1;
        let mut discovered = 0usize;
        for next in neighbors.neighbors(&current) {
            if frontier.offer(next, &current) {
                discovered += 1;
            }
        }
        trace!(expanded, discovered, queued = frontier.len(), "expanded node");
    }

    debug!(
        expanded,
        visited = frontier.visited_count(),
        frontier_high_water = frontier.high_water(),
        "search exhausted frontier without reaching end node"
    );
    SearchOutcome::NoPath
}

/// Walk the parent map backward from `end` until `start`.
fn reconstruct_path<N>(start: &N, end: N, parents: &HashMap<N, N>) -> Path<N>
where
    N: Clone + Eq + Hash,
{
    let mut nodes: Vec<N> = Vec::new();
    let mut cursor = &end;
    while cursor != start {
        let Some(parent) = parents.get(cursor) else {
            break;
        };
        nodes.push(parent.clone());
        cursor = parent;
    }
    nodes.reverse();

    let mut path = match Path::from_nodes(nodes) {
        Some(path) => path,
        None => return Path::single(end),
    };
    path.append(end);
    path
}
