//! Round-robin invariant: players move strictly in sequence.

use super::Invariant;
use crate::MatchController;

/// Invariant: move `i` was made by player `i mod n`, and the turn index
/// points at the next player (or at the last mover once the match ended).
pub struct RoundRobinInvariant;

impl Invariant<MatchController> for RoundRobinInvariant {
    fn holds(game: &MatchController) -> bool {
        let count = game.players().len();
        let history = game.history();

        let in_sequence = history.iter().enumerate().all(|(i, mov)| {
            mov.player_index == i % count && mov.mark == *game.players()[mov.player_index].mark()
        });

        let expected_turn = if game.status().is_terminal() {
            history.len().saturating_sub(1) % count
        } else {
            history.len() % count
        };

        in_sequence && game.turn_index() == expected_turn
    }

    fn description() -> &'static str {
        "Players move in round-robin order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Mark, Player};

    #[test]
    fn test_holds_with_three_players() {
        let mut game = MatchController::new(
            3,
            3,
            vec![
                Player::new("A", Mark('A')),
                Player::new("B", Mark('B')),
                Player::new("C", Mark('C')),
            ],
            3,
        )
        .unwrap();
        assert!(RoundRobinInvariant::holds(&game));
        for col in 0..3 {
            game.apply_move(Coordinate::new(0, col));
            assert!(RoundRobinInvariant::holds(&game));
        }
        game.apply_move(Coordinate::new(0, 0));
        assert!(RoundRobinInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_draw() {
        let mut game = MatchController::new(
            1,
            3,
            vec![Player::new("X", Mark::X), Player::new("O", Mark::O)],
            3,
        )
        .unwrap();
        game.replay([Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]);
        assert!(game.status().is_terminal());
        assert!(RoundRobinInvariant::holds(&game));
    }
}
