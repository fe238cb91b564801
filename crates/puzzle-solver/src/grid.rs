//! A fixed-size rectangular board with bounds-checked access.

use std::fmt;

use serde::Serialize;

use crate::coordinates::Coordinates;
use crate::error::PuzzleError;

/// Row-major grid of cells. Equality and hashing cover the dimensions and
/// every cell, so two grids built independently with the same contents are
/// interchangeable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `init`
    pub fn new(init: T, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![init; rows * cols],
        }
    }

    /// Build a grid from nested rows. Fails if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, PuzzleError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PuzzleError::invalid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Copy of this grid with one cell replaced.
    ///
    /// Out-of-bounds coordinates leave the copy unchanged.
    pub fn with(&self, coord: Coordinates, value: T) -> Self {
        let mut copy = self.clone();
        copy.set(coord, value);
        copy
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Are the given coordinates on the board?
    pub fn contains(&self, coord: Coordinates) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    fn index(&self, coord: Coordinates) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.cols + coord.col as usize)
        } else {
            None
        }
    }

    pub fn get(&self, coord: Coordinates) -> Option<&T> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Overwrite a cell in place, returning false if `coord` is off the board.
    pub fn set(&mut self, coord: Coordinates, value: T) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on zero, and a zero-width grid has no cells anyway
        self.cells.chunks(self.cols.max(1))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// One line: rows separated and surrounded by `|`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for row in self.iter_rows() {
            for cell in row {
                write!(f, " {}", cell)?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
