//! Core domain types shared by the grid, the line detector and the match.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` position on a grid.
///
/// Coordinates are plain values: two coordinates are equal when both
/// components are equal. A coordinate may lie outside any particular grid;
/// bounds are a property of the grid, not of the coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by a signed delta.
    ///
    /// Returns `None` when either component would drop below zero. Upper
    /// bounds are checked by the grid.
    pub fn step(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A player's symbol.
///
/// Any character can serve as a mark. Absence of a mark is never encoded
/// as a special character; see [`Cell::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
pub struct Mark(pub char);

impl Mark {
    /// The classic first mark.
    pub const X: Mark = Mark('X');
    /// The classic second mark.
    pub const O: Mark = Mark('O');

    /// Returns the underlying character.
    pub fn symbol(self) -> char {
        self.0
    }
}

/// One cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A participant in a match. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// The mark this player places.
    mark: Mark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_positive_side() {
        let origin = Coordinate::new(1, 1);
        assert_eq!(origin.step(1, -1), Some(Coordinate::new(2, 0)));
        assert_eq!(origin.step(-1, -1), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_step_below_zero_is_none() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.step(-1, 0), None);
        assert_eq!(corner.step(0, -1), None);
    }

    #[test]
    fn test_empty_cell_has_no_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Marked(Mark::X).mark(), Some(Mark::X));
        assert!(!Cell::Marked(Mark::X).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Mark('#').to_string(), "#");
    }

    #[test]
    fn test_player_getters() {
        let player = Player::new("Ada", Mark::X);
        assert_eq!(player.name(), "Ada");
        assert_eq!(*player.mark(), Mark::X);
    }
}
