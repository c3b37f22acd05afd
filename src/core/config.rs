//! Game configuration.
//!
//! The table is fixed at four seats and seven-tile hands; `player_count` is
//! carried so callers (the CLI's `--players`) get a proper `SetupError`
//! instead of a silently ignored value.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 7;

pub const DEFAULT_PLAYER_NAMES: [&str; PLAYER_COUNT] = ["Kalm", "Claire", "Akasha", "Shiva"];

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,

    /// Display names in seat order.
    pub player_names: Vec<String>,

    /// Deal seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Secondary safety cap on engine turns. Stalemate detection already
    /// bounds every game; `None` disables the cap.
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: PLAYER_COUNT,
            player_names: DEFAULT_PLAYER_NAMES.iter().map(|s| s.to_string()).collect(),
            seed: None,
            max_turns: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.player_count != PLAYER_COUNT {
            return Err(SetupError::PlayerCount {
                expected: PLAYER_COUNT,
                actual: self.player_count,
            });
        }
        if self.player_names.len() != self.player_count {
            return Err(SetupError::PlayerNames {
                expected: self.player_count,
                actual: self.player_names.len(),
            });
        }
        Ok(())
    }
}
