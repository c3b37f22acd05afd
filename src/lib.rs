//! # domino-engine
//!
//! A four-player double-six domino engine.
//!
//! ## Rules
//!
//! - 28 tiles, seven to each of four players, no boneyard
//! - Whoever holds the double-six lays it to open the game
//! - A tile is playable if either pip matches an open end
//! - A player with no playable tile passes
//! - First player out of tiles wins; four passes in a row is a draw
//!
//! ## Architecture
//!
//! - **Single owner**: `TurnEngine` is the only thing that mutates
//!   `GameState`. Drivers, strategies and observers see `&GameState`.
//!
//! - **All-or-nothing moves**: every public move either commits a whole
//!   turn or returns an error with the state untouched.
//!
//! - **Seeded**: dealing and randomized strategies draw from ChaCha8
//!   streams derived from one `u64` seed.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors, turn records, state
//! - `tiles`: tile set, ownership, dealing, display asset names
//! - `board`: the line of play and its open ends
//! - `rules`: legality, placement, the turn engine, invariant checks
//! - `strategy`: pluggable tile selection
//! - `driver`: game loop and observer interface

pub mod board;
pub mod core;
pub mod driver;
pub mod rules;
pub mod strategy;
pub mod tiles;

pub use crate::core::{
    EngineInvariantViolation, GameConfig, GameError, GameRng, GameRngState, GameState, GameStatus,
    IllegalMoveError, NoStarterError, Player, PlayerId, PlayerMap, SetupError, TurnAction,
    TurnRecord,
};

pub use crate::tiles::{
    all_tile_assets, assign_tiles, generate_tiles, tile_asset, AssetId, Tile, TileId, TileOwner,
};

pub use crate::board::{Board, Orientation, PlacedTile, Placement, Side};

pub use crate::rules::{can_play, placement_for, LegalTiles, TurnEngine, TurnOutcome};

pub use crate::strategy::{FirstLegal, HeaviestTile, RandomLegal, SelectionStrategy, StrategyKind};

pub use crate::driver::{
    EndReason, EventLog, GameDriver, GameEvent, GameObserver, GameReport, NullObserver,
};
