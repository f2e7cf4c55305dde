//! Indexed Heaps, Shortest Paths, and Seam Carving for Rust
//!
//! This crate provides an indexed binary min-heap with O(log n) priority
//! changes and a Dijkstra shortest-path engine built on it. It applies both to
//! finding minimum-energy seams in image energy grids.
//!
//! # Features
//!
//! - **Indexed Min-Heap** ([`ArrayHeapMinPq`]): O(log n) add, remove-min, and
//!   change-priority; O(1) membership by item identity
//! - **Graph abstraction** ([`graph::Graph`]): edges produced lazily per vertex
//! - **Dijkstra** ([`pathfinding`]): shortest-path trees with early exit at the
//!   target and a three-way [`ShortestPath`] outcome
//! - **Seam carving** ([`seam`]): horizontal and vertical seams through a
//!   sentinel-augmented grid graph, plus a dynamic-programming finder
//!
//! # Example
//!
//! ```rust
//! use rust_seam_paths::{DijkstraSeamFinder, EnergyGrid, SeamFinder, seam_energy};
//!
//! // 3 columns x 3 rows; the middle row is expensive in the middle column.
//! let grid = EnergyGrid::from_columns(vec![
//!     vec![1.0, 1.0, 1.0],
//!     vec![1.0, 100.0, 1.0],
//!     vec![1.0, 1.0, 1.0],
//! ])
//! .unwrap();
//!
//! let seam = DijkstraSeamFinder::new().find_horizontal_seam(&grid).unwrap();
//! assert_eq!(seam.len(), 3);
//! assert_eq!(seam_energy(&grid, &seam).unwrap(), 3.0);
//! ```

pub mod array_heap;
pub mod energy;
pub mod graph;
pub mod pathfinding;
pub mod seam;
pub mod seam_graph;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::ArrayHeapMinPq;
pub use energy::{EnergyGrid, GridError};
pub use pathfinding::{DijkstraShortestPathFinder, ShortestPath, ShortestPathFinder};
pub use seam::{
    seam_energy, DijkstraSeamFinder, DynamicProgrammingSeamFinder, SeamError, SeamFinder,
};
pub use traits::{HeapError, MinPriorityQueue};
