//! Line detection through a just-played cell.

use crate::grid::Grid;
use crate::types::{Cell, Coordinate, Mark};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One of the four line directions.
///
/// Declaration order is the evaluation order used by [`find_line`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Top-right to bottom-left.
    DiagonalUp,
}

impl Axis {
    /// Forward `(d_row, d_col)` step. The backward step is its negation.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// A run of equal marks through `origin`.
///
/// `start` is the farthest cell reached walking backward along the axis and
/// `end` the farthest walking forward. Every forward step moves down a row,
/// except on horizontal lines where it moves right, so `start` is the upper
/// end of the run (the left end for horizontal lines). Scanning stops at the
/// required length, so a longer run is reported only up to that length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// The cell the scan started from.
    pub origin: Coordinate,
    /// First cell of the run.
    pub start: Coordinate,
    /// Last cell of the run.
    pub end: Coordinate,
    /// Direction of the run.
    pub axis: Axis,
    /// Number of cells in the run, origin included.
    pub length: usize,
}

impl Line {
    /// Every coordinate of the run from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let (d_row, d_col) = self.axis.step();
        let start = self.start;
        (0..self.length as isize).filter_map(move |i| start.step(d_row * i, d_col * i))
    }
}

/// Finds a run of at least `required_length` marks through `origin`.
///
/// Axes are tried in [`Axis`] order and the first one that reaches the
/// threshold wins; later axes are not scanned. On each axis the forward
/// direction is walked first, then the backward one, and walking stops as
/// soon as the threshold is met. Cells off the grid end a run like any
/// other mismatch. Returns `None` if `origin` is empty or `required_length`
/// is zero.
#[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn find_line(grid: &Grid, origin: Coordinate, required_length: usize) -> Option<Line> {
    if required_length == 0 {
        debug!("Zero required length never matches");
        return None;
    }
    let Cell::Marked(mark) = grid.get(origin) else {
        debug!("Origin is empty");
        return None;
    };

    for axis in Axis::iter() {
        let (d_row, d_col) = axis.step();
        let mut length = 1;
        let (end, forward) = walk(
            grid,
            origin,
            mark,
            (d_row, d_col),
            required_length - length,
        );
        length += forward;
        let (start, backward) = walk(
            grid,
            origin,
            mark,
            (-d_row, -d_col),
            required_length - length,
        );
        length += backward;
        debug!(%axis, length, "Scanned axis");

        if length >= required_length {
            return Some(Line {
                origin,
                start,
                end,
                axis,
                length,
            });
        }
    }

    None
}

/// Walks away from `origin` while cells hold `mark`, taking at most `limit`
/// steps.
///
/// Returns the last matching coordinate and the number of steps taken.
fn walk(
    grid: &Grid,
    origin: Coordinate,
    mark: Mark,
    (d_row, d_col): (isize, isize),
    limit: usize,
) -> (Coordinate, usize) {
    let mut last = origin;
    let mut count = 0;
    while count < limit {
        match last.step(d_row, d_col) {
            Some(next) if grid.get(next) == Cell::Marked(mark) => {
                last = next;
                count += 1;
            }
            _ => break,
        }
    }
    (last, count)
}
