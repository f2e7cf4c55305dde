//! Dense energy grids
//!
//! An [`EnergyGrid`] is a rectangular matrix of pixel energies indexed
//! `[column][row]` and stored column-major. Construction validates the input:
//! a grid always has at least one column and one row, and every energy is
//! finite and non-negative.

use thiserror::Error;

/// Reasons an energy matrix is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The grid has no columns, or its columns have no rows
    #[error("energy grid must have at least one column and one row")]
    Empty,
    /// A column's length differs from the first column's
    #[error("column {column} has {actual} rows, expected {expected}")]
    Ragged {
        column: usize,
        expected: usize,
        actual: usize,
    },
    /// A flat buffer does not hold exactly `cols * rows` energies
    #[error("size mismatch: expected {expected} energies, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// An energy is NaN, infinite or negative
    #[error(
        "energy at column {column}, row {row} is {value}; \
         energies must be finite and non-negative"
    )]
    InvalidEnergy { column: usize, row: usize, value: f64 },
}

/// A validated `cols × rows` matrix of pixel energies
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    cols: usize,
    rows: usize,
    /// Column-major: the energy of `(column, row)` is at `column * rows + row`
    data: Vec<f64>,
}

impl EnergyGrid {
    /// Builds a grid from a list of columns
    ///
    /// ```rust
    /// use rust_seam_paths::EnergyGrid;
    ///
    /// let grid = EnergyGrid::from_columns(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(grid.cols(), 2);
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.energy(1, 0), 3.0);
    /// ```
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let rows = columns.first().map_or(0, Vec::len);
        if rows == 0 {
            return Err(GridError::Empty);
        }

        let cols = columns.len();
        let mut data = Vec::with_capacity(cols * rows);
        for (column, energies) in columns.into_iter().enumerate() {
            if energies.len() != rows {
                return Err(GridError::Ragged {
                    column,
                    expected: rows,
                    actual: energies.len(),
                });
            }
            data.extend(energies);
        }

        Self::from_column_major(cols, rows, data)
    }

    /// Builds a grid from column-major data of length `cols * rows`
    pub fn from_column_major(cols: usize, rows: usize, data: Vec<f64>) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::Empty);
        }
        let expected = cols.checked_mul(rows).ok_or(GridError::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if let Some(index) = data.iter().position(|e| !e.is_finite() || *e < 0.0) {
            return Err(GridError::InvalidEnergy {
                column: index / rows,
                row: index % rows,
                value: data[index],
            });
        }

        Ok(EnergyGrid { cols, rows, data })
    }

    /// Builds a grid by evaluating `energy(column, row)` for every pixel
    pub fn from_fn<F>(cols: usize, rows: usize, mut energy: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let data = (0..cols)
            .flat_map(|column| (0..rows).map(move |row| (column, row)))
            .map(|(column, row)| energy(column, row))
            .collect();
        Self::from_column_major(cols, rows, data)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Energy of the pixel at `(column, row)`
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    pub fn energy(&self, column: usize, row: usize) -> f64 {
        assert!(
            column < self.cols && row < self.rows,
            "pixel ({column}, {row}) outside {}x{} grid",
            self.cols,
            self.rows
        );
        self.data[column * self.rows + row]
    }

    /// Energy of the pixel at `(column, row)`, or `None` outside the grid
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        (column < self.cols && row < self.rows).then(|| self.data[column * self.rows + row])
    }

    /// All energies of one column, top to bottom
    pub fn column(&self, column: usize) -> &[f64] {
        &self.data[column * self.rows..(column + 1) * self.rows]
    }

    /// Swaps columns and rows, so vertical seams become horizontal ones
    pub fn transpose(&self) -> EnergyGrid {
        let mut data = Vec::with_capacity(self.data.len());
        for row in 0..self.rows {
            data.extend((0..self.cols).map(|column| self.data[column * self.rows + row]));
        }
        EnergyGrid {
            cols: self.rows,
            rows: self.cols,
            data,
        }
    }
}
