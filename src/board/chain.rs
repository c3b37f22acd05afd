//! The line of play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::tiles::{Tile, TileId};

/// Which end of the line a tile is added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Whether a tile is laid `low|high` or `high|low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    AsIs,
    Flipped,
}

/// Where and how a tile goes on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub side: Side,
    pub orientation: Orientation,
}

impl Placement {
    #[must_use]
    pub const fn new(side: Side, orientation: Orientation) -> Self {
        Self { side, orientation }
    }

    /// Placement of the first tile on an empty board.
    #[must_use]
    pub const fn opening() -> Self {
        Self::new(Side::Right, Orientation::AsIs)
    }
}

/// A tile on the board, with pips as they read left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: TileId,
    pub left: u8,
    pub right: u8,
}

impl std::fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "| {} | {} |", self.left, self.right)
    }
}

/// Placed tiles in order plus the two open ends.
///
/// Append/prepend only: tiles never move once placed. `place` trusts its
/// caller; legality is the rules engine's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    chain: Vector<PlacedTile>,
    ends: Option<(u8, u8)>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// `(left_end, right_end)`, or `None` on an empty board.
    #[must_use]
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        self.ends
    }

    /// Placed tiles, leftmost first.
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.chain.iter()
    }

    #[must_use]
    pub fn leftmost(&self) -> Option<&PlacedTile> {
        self.chain.front()
    }

    #[must_use]
    pub fn rightmost(&self) -> Option<&PlacedTile> {
        self.chain.back()
    }

    /// Lay `tile` on `placement.side` and update that open end to the
    /// tile's outer pip. The first tile sets both ends.
    pub fn place(&mut self, id: TileId, tile: &Tile, placement: Placement) {
        let (left, right) = match placement.orientation {
            Orientation::AsIs => (tile.low(), tile.high()),
            Orientation::Flipped => (tile.high(), tile.low()),
        };
        let placed = PlacedTile { tile: id, left, right };

        self.ends = Some(match (self.ends, placement.side) {
            (None, _) => (left, right),
            (Some((_, right_end)), Side::Left) => (left, right_end),
            (Some((left_end, _)), Side::Right) => (left_end, right),
        });

        match placement.side {
            Side::Left => self.chain.push_front(placed),
            Side::Right => self.chain.push_back(placed),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, placed) in self.chain.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", placed)?;
        }
        Ok(())
    }
}
