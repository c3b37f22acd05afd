//! Tile selection strategies.
//!
//! A strategy sees the legal tiles and a read-only view of the game and
//! names one tile. The engine still validates the choice, so a buggy
//! strategy produces an `IllegalMoveError`, never a corrupted game.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, GameState};
use crate::tiles::TileId;

/// Chooses which legal tile the current player lays.
pub trait SelectionStrategy {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Pick one of `legal`, which is never empty and is in tile order.
    ///
    /// Returning `None` declines the turn and is reported as an error.
    fn select(&mut self, legal: &[TileId], state: &GameState) -> Option<TileId>;
}

/// Lowest tile index among the legal tiles.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl SelectionStrategy for FirstLegal {
    fn name(&self) -> &str {
        "first"
    }

    fn select(&mut self, legal: &[TileId], _state: &GameState) -> Option<TileId> {
        legal.iter().copied().min()
    }
}

/// Uniformly random legal tile.
#[derive(Clone, Debug)]
pub struct RandomLegal {
    rng: GameRng,
}

impl RandomLegal {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Position of the choice stream, to store alongside a game snapshot.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue a stream saved with `rng_state`.
    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self::new(GameRng::from_state(state))
    }
}

impl SelectionStrategy for RandomLegal {
    fn name(&self) -> &str {
        "random"
    }

    fn select(&mut self, legal: &[TileId], _state: &GameState) -> Option<TileId> {
        self.rng.choose(legal).copied()
    }
}

/// Highest pip count first; ties go to the lowest index.
///
/// Getting rid of heavy tiles early is the usual blocked-game hedge.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaviestTile;

impl SelectionStrategy for HeaviestTile {
    fn name(&self) -> &str {
        "heaviest"
    }

    fn select(&mut self, legal: &[TileId], state: &GameState) -> Option<TileId> {
        legal
            .iter()
            .copied()
            .filter_map(|id| state.tile(id).map(|t| (t.pip_sum(), std::cmp::Reverse(id), id)))
            .max()
            .map(|(_, _, id)| id)
    }
}

/// Named strategies, for configuration and the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    #[default]
    First,
    Random,
    Heaviest,
}

impl StrategyKind {
    /// Build a strategy. `rng` seeds randomized strategies.
    #[must_use]
    pub fn build(self, rng: GameRng) -> Box<dyn SelectionStrategy> {
        match self {
            StrategyKind::First => Box::new(FirstLegal),
            StrategyKind::Random => Box::new(RandomLegal::new(rng)),
            StrategyKind::Heaviest => Box::new(HeaviestTile),
        }
    }
}
