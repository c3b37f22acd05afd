//! Engine error taxonomy.
//!
//! - `SetupError`: malformed initial tile or player counts
//! - `NoStarterError`: nobody holds the double-six
//! - `IllegalMoveError`: the caller asked for a move the rules forbid;
//!   state is left untouched and the caller may retry
//! - `EngineInvariantViolation`: internal bookkeeping disagrees with itself.
//!   This is a bug, never a recoverable condition
//!
//! `GameError` wraps all four for operations that can hit more than one.

use thiserror::Error;

use super::player::PlayerId;
use crate::tiles::{TileId, TileOwner};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("expected {expected} players, got {actual}")]
    PlayerCount { expected: usize, actual: usize },

    #[error("expected {expected} player names, got {actual}")]
    PlayerNames { expected: usize, actual: usize },

    #[error("expected {expected} tiles, got {actual}")]
    TileCount { expected: usize, actual: usize },

    #[error("tile {tile} is not freshly generated (owner: {owner})")]
    TileNotFresh { tile: TileId, owner: TileOwner },

    #[error("{player} already holds {count} tiles before the deal")]
    HandNotEmpty { player: PlayerId, count: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no player holds the double-six")]
pub struct NoStarterError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    #[error("the game has not started")]
    NotStarted,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("the game is over")]
    GameOver,

    #[error("tile {tile} does not exist")]
    OutOfRange { tile: TileId },

    #[error("tile {tile} is not held by {player}")]
    NotOwned { tile: TileId, player: PlayerId },

    #[error("tile {tile} matches neither open end")]
    NoMatch { tile: TileId },

    #[error("{player} has a legal tile and cannot pass")]
    MustPlay { player: PlayerId },

    #[error("strategy for {player} declined to choose a tile")]
    NoSelection { player: PlayerId },
}

/// Internal consistency check failure.
///
/// `dump` holds the full `Debug` rendering of the game state at the time
/// of the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine invariant violated: {message}")]
pub struct EngineInvariantViolation {
    pub message: String,
    pub dump: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    NoStarter(#[from] NoStarterError),

    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),

    #[error(transparent)]
    Invariant(#[from] EngineInvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_messages() {
        let err = IllegalMoveError::NotOwned {
            tile: TileId::new(4),
            player: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "tile 4 is not held by Player 1");

        let err = IllegalMoveError::NoMatch { tile: TileId::new(12) };
        assert_eq!(err.to_string(), "tile 12 matches neither open end");
    }

    #[test]
    fn test_game_error_is_transparent() {
        let err: GameError = NoStarterError.into();
        assert_eq!(err.to_string(), "no player holds the double-six");

        let err: GameError = SetupError::PlayerCount { expected: 4, actual: 3 }.into();
        assert_eq!(err.to_string(), "expected 4 players, got 3");
    }
}
