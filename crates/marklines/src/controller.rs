//! Turn management and match status.
//!
//! [`MatchController`] owns the grid and the player roster. Each accepted
//! move marks the grid, runs line detection through the played cell and
//! then either ends the match or passes the turn round-robin.

use crate::action::{Move, MoveRejection};
use crate::error::{ConstructionError, ConstructionErrorKind};
use crate::grid::{Grid, cell_count};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::rules::{Line, find_line};
use crate::settings::MatchSettings;
use crate::types::{Coordinate, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Where a match stands. Derived after every move, never set by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MatchStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// The grid filled up with no line.
    Drawn,
}

impl MatchStatus {
    /// Checks if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    /// Returns the winner, if the match was won.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            MatchStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Returns the winning line, if the match was won.
    pub fn line(&self) -> Option<&Line> {
        match self {
            MatchStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::InProgress => write!(f, "In progress"),
            MatchStatus::Won { winner, line } => write!(
                f,
                "{} ({}) wins: {} line {} to {}",
                winner.name(),
                winner.mark(),
                line.axis,
                line.start,
                line.end
            ),
            MatchStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Checks construction parameters before any state is built.
#[track_caller]
pub(crate) fn validate_parameters(
    rows: usize,
    cols: usize,
    players: &[Player],
    win_length: usize,
) -> Result<(), ConstructionError> {
    cell_count(rows, cols)?;
    if players.len() < 2 {
        return Err(ConstructionError::new(
            ConstructionErrorKind::NotEnoughPlayers(players.len()),
        ));
    }
    if win_length == 0 {
        return Err(ConstructionError::new(ConstructionErrorKind::ZeroWinLength));
    }
    let mut seen = HashSet::new();
    for player in players {
        if !seen.insert(*player.mark()) {
            return Err(ConstructionError::new(
                ConstructionErrorKind::DuplicateMark(*player.mark()),
            ));
        }
    }
    Ok(())
}

/// A single match: grid, players, whose turn it is and how it stands.
///
/// Not synchronized. Hosts sharing a match across threads must serialize
/// access themselves, e.g. one mutex per match.
#[derive(Debug, Clone)]
pub struct MatchController {
    grid: Grid,
    players: Vec<Player>,
    win_length: usize,
    turn_index: usize,
    status: MatchStatus,
    last_line: Option<Line>,
    history: Vec<Move>,
}

impl MatchController {
    /// Creates a match on an empty `rows x cols` grid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] for an empty or oversized grid, fewer
    /// than two players, a zero win length or two players sharing a mark.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(
        rows: usize,
        cols: usize,
        players: Vec<Player>,
        win_length: usize,
    ) -> Result<Self, ConstructionError> {
        validate_parameters(rows, cols, &players, win_length)?;
        let grid = Grid::new(rows, cols)?;
        info!("Match created");
        Ok(Self {
            grid,
            players,
            win_length,
            turn_index: 0,
            status: MatchStatus::InProgress,
            last_line: None,
            history: Vec::new(),
        })
    }

    /// Creates a match from host settings.
    #[instrument(skip(settings))]
    pub fn from_settings(settings: &MatchSettings) -> Result<Self, ConstructionError> {
        Self::new(
            *settings.rows(),
            *settings.cols(),
            settings.players().clone(),
            *settings.win_length(),
        )
    }

    /// Plays `coord` for the current player.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejection`] when the match is over, the coordinate is
    /// off the grid or the cell is taken. The match is left untouched.
    #[instrument(skip(self), fields(turn = self.turn_index))]
    pub fn play(&mut self, coord: Coordinate) -> Result<MatchStatus, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::MatchOver);
        }
        if !self.grid.contains(coord) {
            return Err(MoveRejection::OutOfBounds(coord));
        }

        let player_index = self.turn_index;
        let mark = *self.players[player_index].mark();
        if !self.grid.mark(coord, mark) {
            return Err(MoveRejection::CellOccupied(coord));
        }
        self.history.push(Move::new(player_index, mark, coord));
        debug!(%mark, %coord, "Move accepted");

        self.last_line = find_line(&self.grid, coord, self.win_length);
        if let Some(line) = self.last_line {
            let winner = self.players[player_index].clone();
            info!(winner = %winner.name(), axis = %line.axis, length = line.length, "Match won");
            self.status = MatchStatus::Won { winner, line };
        } else if self.grid.is_full() {
            info!("Match drawn");
            self.status = MatchStatus::Drawn;
        } else {
            self.turn_index = (self.turn_index + 1) % self.players.len();
        }

        self.check_invariants();
        Ok(self.status.clone())
    }

    /// Plays `coord` and returns the resulting status.
    ///
    /// A rejected move is a no-op: the status comes back unchanged. Use
    /// [`MatchController::play`] to learn why a move was turned away.
    pub fn apply_move(&mut self, coord: Coordinate) -> MatchStatus {
        match self.play(coord) {
            Ok(status) => status,
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                self.status.clone()
            }
        }
    }

    /// Applies moves in order and returns the final status.
    ///
    /// Rejected moves are skipped like any other rejected move.
    pub fn replay(&mut self, moves: impl IntoIterator<Item = Coordinate>) -> MatchStatus {
        for coord in moves {
            self.apply_move(coord);
        }
        self.status.clone()
    }

    /// Clears the grid and starts over with the first player.
    ///
    /// Players and win length are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid.reset();
        self.turn_index = 0;
        self.status = MatchStatus::InProgress;
        self.last_line = None;
        self.history.clear();
        info!("Match reset");
    }

    /// Current status.
    pub fn status(&self) -> &MatchStatus {
        &self.status
    }

    /// The player whose turn it is.
    ///
    /// # Panics
    ///
    /// Panics if the match is over. Check [`MatchController::status`] first,
    /// or use [`MatchController::to_move`].
    pub fn current_player(&self) -> &Player {
        match self.to_move() {
            Some(player) => player,
            None => panic!("current_player queried on a finished match ({})", self.status),
        }
    }

    /// The player whose turn it is, or `None` once the match is over.
    pub fn to_move(&self) -> Option<&Player> {
        (!self.status.is_terminal()).then(|| &self.players[self.turn_index])
    }

    /// The grid, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Run length needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Index of the player to move (or of the last mover once terminal).
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Line found by the most recent accepted move, if any.
    pub fn last_line(&self) -> Option<&Line> {
        self.last_line.as_ref()
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = MatchInvariants::check_all(self)
        {
            for violation in violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
        }
    }
}
