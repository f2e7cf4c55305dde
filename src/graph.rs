//! Weighted directed graph abstraction
//!
//! A graph here is only a capability: given a vertex, produce its outgoing
//! edges. Nothing requires an adjacency list to exist, so implementations can
//! derive edges on demand from other state (see
//! [`SeamGraph`](crate::seam_graph::SeamGraph)).

use std::fmt;
use std::hash::Hash;

/// A directed, weighted edge
///
/// Weights must be finite and non-negative for shortest-path searches to be
/// correct. Searches do not check this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -({})-> {}", self.from, self.weight, self.to)
    }
}

/// A graph that can enumerate the outgoing edges of any vertex
///
/// # Example
///
/// ```rust
/// use rust_seam_paths::graph::{Edge, Graph};
///
/// // Vertices 0..10 on a line, each linked to the next with weight 1.
/// struct Line;
///
/// impl Graph for Line {
///     type Vertex = u32;
///     type Edges = Option<Edge<u32>>;
///
///     fn outgoing_edges_from(&self, vertex: &u32) -> Self::Edges {
///         (*vertex < 9).then(|| Edge::new(*vertex, vertex + 1, 1.0))
///     }
/// }
///
/// let edges: Vec<_> = Line.outgoing_edges_from(&3).into_iter().collect();
/// assert_eq!(edges, vec![Edge::new(3, 4, 1.0)]);
/// ```
pub trait Graph {
    /// Vertex identity; searches hash and clone it freely
    type Vertex: Clone + Eq + Hash + fmt::Debug;

    /// Collection returned for a vertex's outgoing edges
    type Edges: IntoIterator<Item = Edge<Self::Vertex>>;

    /// Returns every edge leaving `vertex`; may be empty
    fn outgoing_edges_from(&self, vertex: &Self::Vertex) -> Self::Edges;
}
