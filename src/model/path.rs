//! Path: a sequence of nodes joined by neighbor edges.

use serde::{Deserialize, Serialize};

/// A path through an implicit graph: start → ... → end.
///
/// Always holds at least one node. Consecutive nodes are joined by one edge
/// of the neighbor function that produced the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<N>",
    into = "Vec<N>",
    bound(serialize = "N: Serialize + Clone", deserialize = "N: Deserialize<'de>")
)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    pub fn single(node: N) -> Self {
        Self { nodes: vec![node] }
    }

    /// Build a path from its nodes. Returns `None` for an empty list.
    pub fn from_nodes(nodes: Vec<N>) -> Option<Self> {
        if nodes.is_empty() { None } else { Some(Self { nodes }) }
    }

    /// Number of edges (one less than the number of nodes).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when start and end are the same node.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    pub fn end(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Extend the path by one edge.
    pub fn append(&mut self, node: N) {
        self.nodes.push(node);
    }
}

impl<N> TryFrom<Vec<N>> for Path<N> {
    type Error = &'static str;

    fn try_from(nodes: Vec<N>) -> Result<Self, Self::Error> {
        Path::from_nodes(nodes).ok_or("a path needs at least one node")
    }
}

impl<N> From<Path<N>> for Vec<N> {
    fn from(path: Path<N>) -> Self {
        path.nodes
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
