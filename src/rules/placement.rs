//! Legality and the placement rule.
//!
//! Both are pure functions of a tile and the board. Ownership is checked
//! by the engine, not here.

use crate::board::{Board, Orientation, Placement, Side};
use crate::tiles::Tile;

/// Can `tile` be laid on `board`? Every tile fits an empty board.
#[must_use]
pub fn can_play(tile: &Tile, board: &Board) -> bool {
    match board.open_ends() {
        None => true,
        Some((left, right)) => tile.can_connect_to(left, right),
    }
}

/// Where `tile` goes, or `None` if it matches neither end.
///
/// First match wins:
/// 1. `low == left_end`: left, flipped
/// 2. `high == left_end`: left, as-is
/// 3. `low == right_end`: right, as-is
/// 4. `high == right_end`: right, flipped
///
/// A double matching both ends therefore goes on the left. That tie-break
/// is house policy, not a rule of dominoes.
#[must_use]
pub fn placement_for(tile: &Tile, board: &Board) -> Option<Placement> {
    let Some((left, right)) = board.open_ends() else {
        return Some(Placement::opening());
    };

    if tile.low() == left {
        Some(Placement::new(Side::Left, Orientation::Flipped))
    } else if tile.high() == left {
        Some(Placement::new(Side::Left, Orientation::AsIs))
    } else if tile.low() == right {
        Some(Placement::new(Side::Right, Orientation::AsIs))
    } else if tile.high() == right {
        Some(Placement::new(Side::Right, Orientation::Flipped))
    } else {
        None
    }
}
