//! Rectangular board of write-once cells.

use crate::error::{ConstructionError, ConstructionErrorKind};
use crate::types::{Cell, Coordinate, Mark};
use serde::Serialize;
use tracing::{debug, instrument};

/// A `rows x cols` grid of cells in row-major order.
///
/// A cell, once marked, keeps its mark until [`Grid::reset`]. Reads outside
/// the grid return [`Cell::Empty`] so scans can walk off the edge safely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionErrorKind::EmptyGrid`] if either dimension is
    /// zero and [`ConstructionErrorKind::GridTooLarge`] if the cells could not
    /// be allocated.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConstructionError> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checks if the coordinate lies inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    /// Returns the cell at `coord`, or [`Cell::Empty`] when out of bounds.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.index(coord).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Places `mark` at `coord`.
    ///
    /// Returns `false` without touching the grid if the coordinate is out of
    /// bounds or the cell is already marked.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn mark(&mut self, coord: Coordinate, mark: Mark) -> bool {
        let Some(i) = self.index(coord) else {
            debug!("Coordinate out of bounds");
            return false;
        };
        if !self.cells[i].is_empty() {
            debug!(existing = ?self.cells[i], "Cell already marked");
            return false;
        }
        self.cells[i] = Cell::Marked(mark);
        true
    }

    /// Clears every cell. Dimensions are unchanged.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Coordinate::new(i / cols, i % cols))
    }

    /// Coordinates of the cells still open for play.
    pub fn empty_coordinates(&self) -> Vec<Coordinate> {
        self.coordinates()
            .filter(|coord| self.get(*coord).is_empty())
            .collect()
    }
}

/// Number of cells in a `rows x cols` grid, if such a grid can exist.
#[track_caller]
pub(crate) fn cell_count(rows: usize, cols: usize) -> Result<usize, ConstructionError> {
    if rows == 0 || cols == 0 {
        return Err(ConstructionError::new(ConstructionErrorKind::EmptyGrid {
            rows,
            cols,
        }));
    }
    // A Vec holds at most isize::MAX bytes.
    rows
        .checked_mul(cols)
        .filter(|len| {
            len.checked_mul(size_of::<Cell>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| {
            ConstructionError::new(ConstructionErrorKind::GridTooLarge { rows, cols })
        })
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
            }
        }
        Ok(())
    }
}
