//! Minimum-energy seam finders
//!
//! A horizontal seam crosses the grid left to right with one pixel per column.
//! Consecutive pixels differ by at most one row. A seam is reported as the row
//! of each pixel, in column order. Vertical seams are horizontal seams of the
//! transposed grid, so they report one column per row.
//!
//! Two finders are provided:
//!
//! - [`DijkstraSeamFinder`]: one shortest-path query on a [`SeamGraph`]
//! - [`DynamicProgrammingSeamFinder`]: a column-by-column sweep of cumulative
//!   energies
//!
//! Both return seams of minimum total energy. When several seams tie they may
//! pick different ones.
//!
//! # Example
//!
//! ```rust
//! use rust_seam_paths::{DijkstraSeamFinder, EnergyGrid, SeamFinder};
//!
//! let grid = EnergyGrid::from_columns(vec![
//!     vec![9.0, 1.0, 9.0],
//!     vec![9.0, 9.0, 1.0],
//!     vec![9.0, 1.0, 9.0],
//! ])
//! .unwrap();
//!
//! let seam = DijkstraSeamFinder::new().find_horizontal_seam(&grid).unwrap();
//! assert_eq!(seam, vec![1, 2, 1]);
//! ```

use log::debug;
use thiserror::Error;

use crate::energy::{EnergyGrid, GridError};
use crate::pathfinding::{DijkstraShortestPathFinder, ShortestPath, ShortestPathFinder};
use crate::seam_graph::{SeamGraph, SeamVertex};

/// Errors from finding or checking seams
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeamError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("no seam crosses the energy grid")]
    NoSeam,
    #[error("invalid seam: {0}")]
    InvalidSeam(String),
}

/// Finds minimum-energy seams in an energy grid
pub trait SeamFinder {
    /// Returns the row of each column's pixel on a minimum-energy
    /// left-to-right seam
    fn find_horizontal_seam(&self, energies: &EnergyGrid) -> Result<Vec<usize>, SeamError>;

    /// Returns the column of each row's pixel on a minimum-energy
    /// top-to-bottom seam
    fn find_vertical_seam(&self, energies: &EnergyGrid) -> Result<Vec<usize>, SeamError> {
        self.find_horizontal_seam(&energies.transpose())
    }
}

/// Seam finder backed by Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSeamFinder {
    path_finder: DijkstraShortestPathFinder,
}

impl DijkstraSeamFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_finder(path_finder: DijkstraShortestPathFinder) -> Self {
        DijkstraSeamFinder { path_finder }
    }
}

impl SeamFinder for DijkstraSeamFinder {
    fn find_horizontal_seam(&self, energies: &EnergyGrid) -> Result<Vec<usize>, SeamError> {
        let graph = SeamGraph::new(energies);
        let path = self
            .path_finder
            .find_shortest_path(&graph, &SeamVertex::Source, &SeamVertex::Sink);

        let ShortestPath::Success(edges) = &path else {
            return Err(SeamError::NoSeam);
        };

        let seam: Vec<usize> = edges
            .iter()
            .filter_map(|edge| graph.coordinates(&edge.to))
            .map(|(_, row)| row)
            .collect();
        if seam.len() != energies.cols() {
            return Err(SeamError::NoSeam);
        }

        debug!(
            "dijkstra seam across {}x{} grid, energy {}",
            energies.cols(),
            energies.rows(),
            path.total_weight().unwrap_or_default()
        );
        Ok(seam)
    }
}

/// Seam finder that sweeps cumulative energies column by column
///
/// Column `c` of the cumulative table holds the cheapest energy of any seam
/// prefix ending at each of its rows. The seam is recovered by walking back
/// from the cheapest row of the last column.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgrammingSeamFinder;

impl DynamicProgrammingSeamFinder {
    pub fn new() -> Self {
        DynamicProgrammingSeamFinder
    }
}

/// Index of the smallest value among `rows` of `column`; ties pick the lowest
/// row
fn argmin(column: &[f64], rows: impl Iterator<Item = usize>) -> usize {
    rows.fold(None, |best: Option<usize>, row| match best {
        Some(b) if column[b] <= column[row] => Some(b),
        _ => Some(row),
    })
    .unwrap_or(0)
}

/// Rows of the next or previous column reachable from `row`
fn neighbors(row: usize, rows: usize) -> std::ops::RangeInclusive<usize> {
    row.saturating_sub(1)..=(row + 1).min(rows - 1)
}

impl SeamFinder for DynamicProgrammingSeamFinder {
    fn find_horizontal_seam(&self, energies: &EnergyGrid) -> Result<Vec<usize>, SeamError> {
        let cols = energies.cols();
        let rows = energies.rows();

        let mut cumulative: Vec<Vec<f64>> = Vec::with_capacity(cols);
        cumulative.push(energies.column(0).to_vec());
        for column in 1..cols {
            let previous = &cumulative[column - 1];
            let next = (0..rows)
                .map(|row| {
                    let best = neighbors(row, rows)
                        .map(|r| previous[r])
                        .fold(f64::INFINITY, f64::min);
                    best + energies.energy(column, row)
                })
                .collect();
            cumulative.push(next);
        }

        let mut seam = vec![0; cols];
        seam[cols - 1] = argmin(&cumulative[cols - 1], 0..rows);
        for column in (0..cols - 1).rev() {
            seam[column] = argmin(&cumulative[column], neighbors(seam[column + 1], rows));
        }

        debug!(
            "dynamic programming seam across {}x{} grid, energy {}",
            cols,
            rows,
            cumulative[cols - 1][seam[cols - 1]]
        );
        Ok(seam)
    }
}

/// Returns the total energy of a horizontal seam after checking that it is
/// well formed
///
/// ```rust
/// use rust_seam_paths::{seam_energy, EnergyGrid};
///
/// let grid = EnergyGrid::from_columns(vec![vec![1.0, 5.0], vec![2.0, 7.0]]).unwrap();
/// assert_eq!(seam_energy(&grid, &[1, 0]), Ok(7.0));
/// assert!(seam_energy(&grid, &[0]).is_err());
/// ```
pub fn seam_energy(energies: &EnergyGrid, seam: &[usize]) -> Result<f64, SeamError> {
    if seam.len() != energies.cols() {
        return Err(SeamError::InvalidSeam(format!(
            "length {} does not match {} columns",
            seam.len(),
            energies.cols()
        )));
    }
    if let Some((column, row)) = seam.iter().enumerate().find(|&(_, &row)| row >= energies.rows()) {
        return Err(SeamError::InvalidSeam(format!(
            "row {} in column {} is outside {} rows",
            row,
            column,
            energies.rows()
        )));
    }
    if let Some(column) = seam.windows(2).position(|pair| pair[0].abs_diff(pair[1]) > 1) {
        return Err(SeamError::InvalidSeam(format!(
            "rows jump from {} to {} between columns {} and {}",
            seam[column],
            seam[column + 1],
            column,
            column + 1
        )));
    }

    Ok(seam
        .iter()
        .enumerate()
        .map(|(column, &row)| energies.energy(column, row))
        .sum())
}
