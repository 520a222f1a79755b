//! Match settings, as a host's settings form would supply them.

use crate::controller::validate_parameters;
use crate::error::SettingsError;
use crate::types::{Mark, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Dimensions, win length and roster for a new match.
///
/// Missing fields fall back to the classic game: 3x3, three in a row,
/// X against O.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Number of rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Number of columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Run length needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<Player>,
}

fn default_rows() -> usize {
    3
}

fn default_cols() -> usize {
    3
}

fn default_win_length() -> usize {
    3
}

fn default_players() -> Vec<Player> {
    vec![
        Player::new("Player One", Mark::X),
        Player::new("Player Two", Mark::O),
    ]
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            win_length: default_win_length(),
            players: default_players(),
        }
    }
}

impl MatchSettings {
    /// Creates settings from explicit values. Call [`MatchSettings::validate`]
    /// or build the match to check them.
    #[instrument(skip(players))]
    pub fn new(rows: usize, cols: usize, win_length: usize, players: Vec<Player>) -> Self {
        Self {
            rows,
            cols,
            win_length,
            players,
        }
    }

    /// Parses and validates settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        debug!(
            rows = settings.rows,
            cols = settings.cols,
            win_length = settings.win_length,
            players = settings.players.len(),
            "Settings parsed"
        );
        Ok(settings)
    }

    /// Loads and validates settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_toml_str(&content)?;
        info!("Settings loaded successfully");
        Ok(settings)
    }

    /// Applies the match construction rules without building a match.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_parameters(self.rows, self.cols, &self.players, self.win_length)?;
        Ok(())
    }
}
