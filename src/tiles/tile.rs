//! Domino tiles and ownership.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Highest pip value on a double-six set.
pub const MAX_PIP: u8 = 6;

/// Tiles in a double-six set.
pub const TILE_COUNT: usize = 28;

/// Index of a tile in the game's tile list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a tile currently is.
///
/// "Never dealt" and "already played" are distinct states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileOwner {
    Unassigned,
    Player(PlayerId),
    Played,
}

impl std::fmt::Display for TileOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileOwner::Unassigned => write!(f, "unassigned"),
            TileOwner::Player(p) => write!(f, "{}", p),
            TileOwner::Played => write!(f, "played"),
        }
    }
}

/// A domino tile.
///
/// The pip pair is fixed at construction and stored with `low <= high`;
/// only `owner` changes over a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    low: u8,
    high: u8,
    pub owner: TileOwner,
}

impl Tile {
    /// Create an unassigned tile. Pip order does not matter.
    ///
    /// # Panics
    ///
    /// If either pip exceeds `MAX_PIP`.
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "pips must be in 0..={MAX_PIP}");
        Self {
            low: a.min(b),
            high: a.max(b),
            owner: TileOwner::Unassigned,
        }
    }

    #[must_use]
    pub fn owned_by(mut self, owner: TileOwner) -> Self {
        self.owner = owner;
        self
    }

    #[must_use]
    pub fn low(&self) -> u8 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> u8 {
        self.high
    }

    #[must_use]
    pub fn pips(&self) -> (u8, u8) {
        (self.low, self.high)
    }

    #[must_use]
    pub fn pip_sum(&self) -> u8 {
        self.low + self.high
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.low == self.high
    }

    #[must_use]
    pub fn is_double_six(&self) -> bool {
        self.low == MAX_PIP && self.high == MAX_PIP
    }

    /// Does either pip show `pip`?
    #[must_use]
    pub fn has_pip(&self, pip: u8) -> bool {
        self.low == pip || self.high == pip
    }

    /// Can this tile connect to either open end?
    #[must_use]
    pub fn can_connect_to(&self, left_end: u8, right_end: u8) -> bool {
        self.has_pip(left_end) || self.has_pip(right_end)
    }

    #[must_use]
    pub fn is_held_by(&self, player: PlayerId) -> bool {
        self.owner == TileOwner::Player(player)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "| {} | {} |", self.low, self.high)
    }
}
