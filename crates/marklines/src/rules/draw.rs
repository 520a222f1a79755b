//! Draw detection.

use super::win::find_line;
use crate::grid::Grid;
use crate::types::Coordinate;
use tracing::instrument;

/// Checks if the grid is full (all cells marked).
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// Checks if a full grid holds no run of `win_length` anywhere.
///
/// Scans every cell, so it is meant for whole-board checks rather than
/// per-move updates.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid, win_length: usize) -> bool {
    is_full(grid)
        && grid
            .coordinates()
            .all(|coord: Coordinate| find_line(grid, coord, win_length).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn fill(grid: &mut Grid, rows: [&str; 3]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                grid.mark(Coordinate::new(r, c), Mark(ch));
            }
        }
    }

    #[test]
    fn test_empty_grid_not_full() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(!is_full(&grid));
        assert!(!is_draw(&grid, 3));
    }

    #[test]
    fn test_draw_detection() {
        let mut grid = Grid::new(3, 3).unwrap();
        fill(&mut grid, ["XOX", "XOO", "OXX"]);
        assert!(is_full(&grid));
        assert!(is_draw(&grid, 3));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut grid = Grid::new(3, 3).unwrap();
        fill(&mut grid, ["XXX", "OOX", "XOO"]);
        assert!(is_full(&grid));
        assert!(!is_draw(&grid, 3));
    }
}
