//! Marklines - grid game core.
//!
//! Board, line detection and turn management for tic-tac-toe style games
//! on any rectangular grid with any win length. Rendering and input belong
//! to the host; it drives a [`MatchController`] and reads the [`Grid`] and
//! [`MatchStatus`] back.
//!
//! # Architecture
//!
//! - **Grid**: write-once cells with boundary-safe reads
//! - **Rules**: [`find_line`] scans the four axes through a played cell
//! - **Controller**: applies moves, passes turns round-robin, tracks status
//! - **Settings**: TOML-loadable match parameters
//!
//! # Example
//!
//! ```
//! use marklines::{Coordinate, Mark, MatchController, MatchStatus, Player};
//!
//! let players = vec![Player::new("Ada", Mark::X), Player::new("Bo", Mark::O)];
//! let mut game = MatchController::new(3, 3, players, 3).unwrap();
//! game.apply_move(Coordinate::new(0, 0));
//! assert_eq!(game.status(), &MatchStatus::InProgress);
//! assert_eq!(game.current_player().name(), "Bo");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
mod grid;
mod settings;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveRejection};
pub use controller::{MatchController, MatchStatus};
pub use error::{ConstructionError, ConstructionErrorKind, SettingsError};
pub use grid::Grid;
pub use rules::{Axis, Line, find_line, is_draw, is_full};
pub use settings::MatchSettings;
pub use types::{Cell, Coordinate, Mark, Player};
