//! Construction and settings errors.

use crate::types::Mark;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a grid or match could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConstructionErrorKind {
    /// Rows or columns is zero.
    #[display("Grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// Rows times columns does not fit in memory.
    #[display("Grid of {rows}x{cols} cells is too large")]
    GridTooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// Fewer than two players were supplied.
    #[display("A match needs at least two players (got {_0})")]
    NotEnoughPlayers(usize),
    /// Win length is zero.
    #[display("Win length must be at least 1")]
    ZeroWinLength,
    /// Two players share a mark.
    #[display("Mark {_0} is used by more than one player")]
    DuplicateMark(Mark),
}

/// Invalid construction parameters, with caller location tracking.
///
/// Raised before any grid or match state exists.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Construction error: {} at {}:{}", kind, file, line)]
pub struct ConstructionError {
    /// What was wrong.
    pub kind: ConstructionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConstructionError {
    /// Creates a new construction error.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConstructionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure to read or apply match settings.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ConstructionError> for SettingsError {
    #[track_caller]
    fn from(err: ConstructionError) -> Self {
        Self::new(format!("Invalid settings: {}", err.kind))
    }
}

impl From<toml::de::Error> for SettingsError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse settings: {}", err))
    }
}

impl From<std::io::Error> for SettingsError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read settings file: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_records_location() {
        let err = ConstructionError::new(ConstructionErrorKind::ZeroWinLength);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("Win length must be at least 1"));
    }

    #[test]
    fn test_construction_error_converts_to_settings_error() {
        let err = ConstructionError::new(ConstructionErrorKind::NotEnoughPlayers(1));
        let settings: SettingsError = err.into();
        assert!(settings.message.contains("at least two players"));
    }
}
