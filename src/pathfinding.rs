//! Dijkstra's shortest paths over a [`Graph`]
//!
//! The search grows a shortest-path tree from a start vertex and stops as
//! soon as the end vertex is finalized. Each vertex moves through three
//! states:
//!
//! - **unseen**: no edge into it has been relaxed yet
//! - **frontier**: it is queued with a tentative distance
//! - **finalized**: its distance is proven minimal and its tree edge is fixed
//!
//! Vertices, not edges, are the queue items. The best edge found so far into
//! each frontier vertex is kept beside the queue, so a shorter edge replaces
//! the old one and lowers the vertex's key in place.
//!
//! # Example
//!
//! ```rust
//! use rust_seam_paths::graph::{Edge, Graph};
//! use rust_seam_paths::pathfinding::{
//!     DijkstraShortestPathFinder, ShortestPath, ShortestPathFinder,
//! };
//!
//! //   a --1--> b --1--> c
//! //   |                 ^
//! //   +--------5--------+
//! struct Small;
//!
//! impl Graph for Small {
//!     type Vertex = char;
//!     type Edges = Vec<Edge<char>>;
//!
//!     fn outgoing_edges_from(&self, vertex: &char) -> Vec<Edge<char>> {
//!         match vertex {
//!             'a' => vec![Edge::new('a', 'b', 1.0), Edge::new('a', 'c', 5.0)],
//!             'b' => vec![Edge::new('b', 'c', 1.0)],
//!             _ => vec![],
//!         }
//!     }
//! }
//!
//! let finder = DijkstraShortestPathFinder::new();
//! let path = finder.find_shortest_path(&Small, &'a', &'c');
//! assert_eq!(path.vertices(), vec!['a', 'b', 'c']);
//! assert_eq!(path.total_weight(), Some(2.0));
//!
//! assert_eq!(finder.find_shortest_path(&Small, &'c', &'a'), ShortestPath::NoPath);
//! ```

use std::hash::Hash;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::array_heap::ArrayHeapMinPq;
use crate::graph::{Edge, Graph};
use crate::traits::MinPriorityQueue;

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath<V> {
    /// The end vertex is unreachable from the start
    NoPath,
    /// The start and end are the same vertex
    Trivial(V),
    /// Edges from start to end, in order
    Success(Vec<Edge<V>>),
}

impl<V: Clone> ShortestPath<V> {
    /// Returns true unless the end was unreachable
    pub fn exists(&self) -> bool {
        !matches!(self, ShortestPath::NoPath)
    }

    /// Returns the path's edges; empty for [`NoPath`](Self::NoPath) and
    /// [`Trivial`](Self::Trivial)
    pub fn edges(&self) -> &[Edge<V>] {
        match self {
            ShortestPath::Success(edges) => edges,
            ShortestPath::NoPath | ShortestPath::Trivial(_) => &[],
        }
    }

    /// Returns the visited vertices from start to end, inclusive
    pub fn vertices(&self) -> Vec<V> {
        match self {
            ShortestPath::NoPath => Vec::new(),
            ShortestPath::Trivial(vertex) => vec![vertex.clone()],
            ShortestPath::Success(edges) => edges
                .first()
                .map(|edge| edge.from.clone())
                .into_iter()
                .chain(edges.iter().map(|edge| edge.to.clone()))
                .collect(),
        }
    }

    /// Returns the summed edge weight, or `None` if there is no path
    pub fn total_weight(&self) -> Option<f64> {
        match self {
            ShortestPath::NoPath => None,
            ShortestPath::Trivial(_) => Some(0.0),
            ShortestPath::Success(edges) => Some(edges.iter().map(|edge| edge.weight).sum()),
        }
    }
}

/// Last edge on the shortest known path to each reached vertex
///
/// The start vertex never has an entry.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V> {
    edges: FxHashMap<V, Edge<V>>,
}

impl<V: Clone + Eq + Hash> ShortestPathTree<V> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        ShortestPathTree {
            edges: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records `edge` as the tree edge into `edge.to`
    pub fn insert(&mut self, edge: Edge<V>) {
        self.edges.insert(edge.to.clone(), edge);
    }

    /// Returns the tree edge into `vertex`
    pub fn edge_to(&self, vertex: &V) -> Option<&Edge<V>> {
        self.edges.get(vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.edges.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over all tree edges in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Edge<V>> {
        self.edges.values()
    }

    /// Walks the tree back from `end` to `start`
    ///
    /// Returns [`ShortestPath::NoPath`] when `end` was not reached or when the
    /// chain of edges never arrives at `start`.
    pub fn extract_path(&self, start: &V, end: &V) -> ShortestPath<V> {
        if start == end {
            return ShortestPath::Trivial(start.clone());
        }

        let Some(mut edge) = self.edges.get(end) else {
            return ShortestPath::NoPath;
        };

        let mut path = Vec::new();
        loop {
            path.push(edge.clone());
            if edge.from == *start {
                break;
            }
            // A chain longer than the tree has to be a cycle.
            if path.len() >= self.edges.len() {
                return ShortestPath::NoPath;
            }
            match self.edges.get(&edge.from) {
                Some(previous) => edge = previous,
                None => return ShortestPath::NoPath,
            }
        }

        path.reverse();
        ShortestPath::Success(path)
    }
}

impl<V: Clone + Eq + Hash> Default for ShortestPathTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> FromIterator<Edge<V>> for ShortestPathTree<V> {
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let mut tree = ShortestPathTree::new();
        for edge in iter {
            tree.insert(edge);
        }
        tree
    }
}

/// A shortest-path algorithm that works by building a shortest-path tree
pub trait ShortestPathFinder {
    /// Builds the tree from `start`, stopping once `end` is finalized
    ///
    /// If `end` is unreachable, the tree covers everything reachable from
    /// `start`.
    fn construct_shortest_paths_tree<G: Graph>(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> ShortestPathTree<G::Vertex>;

    /// Finds a shortest path from `start` to `end`
    fn find_shortest_path<G: Graph>(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> ShortestPath<G::Vertex> {
        self.construct_shortest_paths_tree(graph, start, end)
            .extract_path(start, end)
    }
}

/// Dijkstra's algorithm on an [`ArrayHeapMinPq`]
///
/// Edge weights must be non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraShortestPathFinder {
    /// Initial capacity of the queue and per-search maps
    capacity: usize,
}

impl DijkstraShortestPathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presizes the queue and search maps of every query for `capacity`
    /// vertices
    pub fn with_capacity(capacity: usize) -> Self {
        DijkstraShortestPathFinder { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ShortestPathFinder for DijkstraShortestPathFinder {
    fn construct_shortest_paths_tree<G: Graph>(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> ShortestPathTree<G::Vertex> {
        let heap = ArrayHeapMinPq::with_capacity(self.capacity);
        search(graph, start, end, heap, self.capacity)
    }
}

/// Runs Dijkstra's algorithm with the queue implementation `Q`
///
/// # Type Parameters
/// - `G`: The graph type implementing [`Graph`]
/// - `Q`: The queue type implementing [`MinPriorityQueue`]
///
/// # Example
/// ```rust
/// use rust_seam_paths::graph::{Edge, Graph};
/// use rust_seam_paths::pathfinding::dijkstra;
/// use rust_seam_paths::ArrayHeapMinPq;
///
/// struct Line;
///
/// impl Graph for Line {
///     type Vertex = u32;
///     type Edges = Option<Edge<u32>>;
///
///     fn outgoing_edges_from(&self, vertex: &u32) -> Self::Edges {
///         (*vertex < 100).then(|| Edge::new(*vertex, vertex + 1, 1.0))
///     }
/// }
///
/// let path = dijkstra::<_, ArrayHeapMinPq<_>>(&Line, &0, &5);
/// assert_eq!(path.edges().len(), 5);
/// assert_eq!(path.total_weight(), Some(5.0));
/// ```
pub fn dijkstra<G, Q>(graph: &G, start: &G::Vertex, end: &G::Vertex) -> ShortestPath<G::Vertex>
where
    G: Graph,
    Q: MinPriorityQueue<G::Vertex>,
{
    search(graph, start, end, Q::new(), 0).extract_path(start, end)
}

/// Internal search implementation.
fn search<G, Q>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
    mut heap: Q,
    capacity: usize,
) -> ShortestPathTree<G::Vertex>
where
    G: Graph,
    Q: MinPriorityQueue<G::Vertex>,
{
    debug_assert!(heap.is_empty(), "search needs an empty queue");

    let mut known: FxHashSet<G::Vertex> =
        FxHashSet::with_capacity_and_hasher(capacity, Default::default());
    let mut dist_to: FxHashMap<G::Vertex, f64> =
        FxHashMap::with_capacity_and_hasher(capacity, Default::default());
    // Best edge into each frontier vertex
    let mut frontier: FxHashMap<G::Vertex, Edge<G::Vertex>> =
        FxHashMap::with_capacity_and_hasher(capacity, Default::default());
    let mut tree = ShortestPathTree::with_capacity(capacity);

    debug!("dijkstra search from {:?} to {:?}", start, end);

    known.insert(start.clone());
    dist_to.insert(start.clone(), 0.0);
    let mut current = start.clone();
    let mut current_dist = 0.0;

    while !known.contains(end) {
        for edge in graph.outgoing_edges_from(&current) {
            if known.contains(&edge.to) {
                continue;
            }

            let candidate = current_dist + edge.weight;
            let best = dist_to.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                let queued = if heap.contains(&edge.to) {
                    heap.change_priority(&edge.to, candidate)
                } else {
                    heap.add(edge.to.clone(), candidate)
                };
                // A rejected key leaves the vertex unseen; later edges may
                // still reach it.
                if let Err(e) = queued {
                    debug!("queue rejected {:?} at distance {}: {}", edge.to, candidate, e);
                    continue;
                }
                dist_to.insert(edge.to.clone(), candidate);
                frontier.insert(edge.to.clone(), edge);
            }
        }

        // Skip anything already finalized; the first unknown vertex is next.
        let next = loop {
            match heap.remove_min() {
                Ok(vertex) if known.contains(&vertex) => continue,
                Ok(vertex) => break Some(vertex),
                Err(_) => break None,
            }
        };
        let Some(next) = next else {
            break;
        };

        let (Some(edge), Some(&distance)) = (frontier.remove(&next), dist_to.get(&next)) else {
            break;
        };

        trace!("finalized {:?} at distance {}", next, distance);
        known.insert(next.clone());
        tree.insert(edge);
        current = next;
        current_dist = distance;
    }

    debug!(
        "dijkstra search finished: {} vertices finalized, target {}",
        known.len(),
        if known.contains(end) { "reached" } else { "unreachable" }
    );

    tree
}
