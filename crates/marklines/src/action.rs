//! Accepted moves and the reasons a move can be turned away.

use crate::types::{Coordinate, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move the match accepted: which player marked which cell.
///
/// The match keeps these in order so a game can be audited or replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Index of the mover in the match's player sequence.
    pub player_index: usize,
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coordinate)
    }
}

/// Why a move was rejected. Always recoverable; the match is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The coordinate is outside the grid.
    #[display("Coordinate {} is outside the grid", _0)]
    OutOfBounds(Coordinate),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// The match has already been won or drawn.
    #[display("Match is already over")]
    MatchOver,
}

impl std::error::Error for MoveRejection {}
