//! An energy grid viewed as a DAG for seam search
//!
//! Pixels are vertices. Every pixel links to the up to three pixels in the
//! next column that lie within one row of it. Two sentinels turn "best
//! left-to-right seam" into a single shortest-path query:
//!
//! ```text
//!            col 0      col 1            col c-1
//!          +-> (0,0) --> (1,0) --> ... --> (c-1,0) --+
//!  Source -+-> (0,1) --> (1,1) --> ... --> (c-1,1) --+-> Sink
//!          +-> (0,2) --> (1,2) --> ... --> (c-1,2) --+
//! ```
//!
//! (Diagonal links between neighbouring rows are omitted above.)
//!
//! An edge's weight is the energy of the pixel it leaves, not the pixel it
//! enters. Leaving the last column costs that pixel's energy, so a
//! `Source → Sink` path weighs exactly the sum of the pixels on it.

use smallvec::SmallVec;

use crate::energy::EnergyGrid;
use crate::graph::{Edge, Graph};

/// A vertex of a [`SeamGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeamVertex {
    /// Sits before column 0
    Source,
    /// The pixel at flattened index `column * rows + row`
    Pixel(usize),
    /// Sits after the last column
    Sink,
}

/// Outgoing edges of one vertex; interior pixels fit inline
pub type SeamEdges = SmallVec<[Edge<SeamVertex>; 3]>;

/// Lazy graph over a borrowed [`EnergyGrid`]
#[derive(Debug, Clone, Copy)]
pub struct SeamGraph<'a> {
    energies: &'a EnergyGrid,
}

impl<'a> SeamGraph<'a> {
    pub fn new(energies: &'a EnergyGrid) -> Self {
        SeamGraph { energies }
    }

    pub fn energies(&self) -> &'a EnergyGrid {
        self.energies
    }

    /// The vertex of the pixel at `(column, row)`
    pub fn pixel(&self, column: usize, row: usize) -> SeamVertex {
        SeamVertex::Pixel(column * self.energies.rows() + row)
    }

    /// The `(column, row)` of a pixel vertex; `None` for sentinels and
    /// indices outside the grid
    pub fn coordinates(&self, vertex: &SeamVertex) -> Option<(usize, usize)> {
        let rows = self.energies.rows();
        match *vertex {
            SeamVertex::Pixel(index) if index < self.energies.cols() * rows => {
                Some((index / rows, index % rows))
            }
            _ => None,
        }
    }
}

impl Graph for SeamGraph<'_> {
    type Vertex = SeamVertex;
    type Edges = SeamEdges;

    fn outgoing_edges_from(&self, vertex: &SeamVertex) -> SeamEdges {
        let grid = self.energies;
        let mut edges = SeamEdges::new();

        match *vertex {
            SeamVertex::Source => {
                edges.extend(
                    (0..grid.rows()).map(|row| Edge::new(*vertex, self.pixel(0, row), 0.0)),
                );
            }
            SeamVertex::Sink => {}
            SeamVertex::Pixel(_) => {
                let Some((column, row)) = self.coordinates(vertex) else {
                    return edges;
                };
                let weight = grid.energy(column, row);

                if column + 1 == grid.cols() {
                    edges.push(Edge::new(*vertex, SeamVertex::Sink, weight));
                } else {
                    let lowest = row.saturating_sub(1);
                    let highest = (row + 1).min(grid.rows() - 1);
                    edges.extend((lowest..=highest).map(|next| {
                        Edge::new(*vertex, self.pixel(column + 1, next), weight)
                    }));
                }
            }
        }

        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> EnergyGrid {
        EnergyGrid::from_fn(3, 3, |c, r| (10 * c + r) as f64).unwrap()
    }

    fn targets(edges: &SeamEdges) -> Vec<SeamVertex> {
        edges.iter().map(|e| e.to).collect()
    }

    #[test]
    fn test_source_reaches_first_column() {
        let grid = grid_3x3();
        let graph = SeamGraph::new(&grid);
        let edges = graph.outgoing_edges_from(&SeamVertex::Source);
        assert_eq!(
            targets(&edges),
            vec![graph.pixel(0, 0), graph.pixel(0, 1), graph.pixel(0, 2)]
        );
        assert!(edges.iter().all(|e| e.weight == 0.0));
    }

    #[test]
    fn test_interior_pixel_has_three_edges_weighted_by_source() {
        let grid = grid_3x3();
        let graph = SeamGraph::new(&grid);
        let edges = graph.outgoing_edges_from(&graph.pixel(1, 1));
        assert_eq!(
            targets(&edges),
            vec![graph.pixel(2, 0), graph.pixel(2, 1), graph.pixel(2, 2)]
        );
        assert!(edges.iter().all(|e| e.weight == 11.0));
        assert!(!edges.spilled());
    }

    #[test]
    fn test_border_rows_have_two_edges() {
        let grid = grid_3x3();
        let graph = SeamGraph::new(&grid);

        let top = graph.outgoing_edges_from(&graph.pixel(0, 0));
        assert_eq!(targets(&top), vec![graph.pixel(1, 0), graph.pixel(1, 1)]);

        let bottom = graph.outgoing_edges_from(&graph.pixel(0, 2));
        assert_eq!(targets(&bottom), vec![graph.pixel(1, 1), graph.pixel(1, 2)]);
        assert!(bottom.iter().all(|e| e.weight == 2.0));
    }

    #[test]
    fn test_last_column_links_to_sink() {
        let grid = grid_3x3();
        let graph = SeamGraph::new(&grid);
        let edges = graph.outgoing_edges_from(&graph.pixel(2, 1));
        assert_eq!(edges.as_slice(), &[Edge::new(graph.pixel(2, 1), SeamVertex::Sink, 21.0)]);
        assert!(graph.outgoing_edges_from(&SeamVertex::Sink).is_empty());
    }

    #[test]
    fn test_single_row_has_one_edge() {
        let grid = EnergyGrid::from_columns(vec![vec![4.0], vec![2.0]]).unwrap();
        let graph = SeamGraph::new(&grid);
        assert_eq!(graph.energies().rows(), 1);

        let edges = graph.outgoing_edges_from(&graph.pixel(0, 0));
        assert_eq!(
            edges.as_slice(),
            &[Edge::new(graph.pixel(0, 0), graph.pixel(1, 0), 4.0)]
        );
    }

    #[test]
    fn test_out_of_range_pixel_has_no_edges() {
        let grid = grid_3x3();
        let graph = SeamGraph::new(&grid);
        assert!(graph.outgoing_edges_from(&SeamVertex::Pixel(9)).is_empty());
        assert_eq!(graph.coordinates(&SeamVertex::Pixel(9)), None);
        assert_eq!(graph.coordinates(&SeamVertex::Pixel(5)), Some((1, 2)));
    }
}
