//! Core types: players, RNG, configuration, errors, turn records, state.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{TurnAction, TurnRecord};
pub use config::{GameConfig, DEFAULT_PLAYER_NAMES, HAND_SIZE, PLAYER_COUNT};
pub use error::{EngineInvariantViolation, GameError, IllegalMoveError, NoStarterError, SetupError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameStatus};
