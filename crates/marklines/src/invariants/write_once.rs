//! Write-once grid invariant: cells never change once marked.

use super::Invariant;
use crate::{Grid, MatchController};

/// Invariant: the grid is exactly the history replayed onto an empty grid.
///
/// Replaying never hits an occupied cell, so no mark was overwritten and no
/// cell was filled outside a recorded move.
pub struct WriteOnceGridInvariant;

impl Invariant<MatchController> for WriteOnceGridInvariant {
    fn holds(game: &MatchController) -> bool {
        let Ok(mut rebuilt) = Grid::new(game.grid().rows(), game.grid().cols()) else {
            return false;
        };

        for mov in game.history() {
            if !rebuilt.mark(mov.coordinate, mov.mark) {
                return false;
            }
        }

        rebuilt == *game.grid()
    }

    fn description() -> &'static str {
        "Grid cells are write-once and match the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Mark, Player};

    fn classic() -> MatchController {
        MatchController::new(
            3,
            3,
            vec![Player::new("X", Mark::X), Player::new("O", Mark::O)],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_match_holds() {
        assert!(WriteOnceGridInvariant::holds(&classic()));
    }

    #[test]
    fn test_holds_after_moves_and_rejections() {
        let mut game = classic();
        game.apply_move(Coordinate::new(1, 1));
        game.apply_move(Coordinate::new(1, 1));
        game.apply_move(Coordinate::new(7, 7));
        game.apply_move(Coordinate::new(0, 2));
        assert!(WriteOnceGridInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_reset() {
        let mut game = classic();
        game.apply_move(Coordinate::new(0, 0));
        game.reset();
        assert!(WriteOnceGridInvariant::holds(&game));
    }
}
