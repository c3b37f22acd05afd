//! Turn records: what each seat did, in order.
//!
//! Every committed move appends one `TurnRecord` to the state's history:
//! the forced opening, each play, and each pass. Replaying the history
//! against the same deal reproduces the game.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::Placement;
use crate::tiles::TileId;

/// What a seat did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// The double-six laid on the empty board.
    Opening { tile: TileId },
    Play { tile: TileId, placement: Placement },
    Pass,
}

impl TurnAction {
    /// The tile laid, if any.
    #[must_use]
    pub fn tile(&self) -> Option<TileId> {
        match self {
            TurnAction::Opening { tile } | TurnAction::Play { tile, .. } => Some(*tile),
            TurnAction::Pass => None,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, TurnAction::Pass)
    }
}

/// One entry of the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Engine turn number. The opening is turn 0.
    pub turn: u32,
    pub player: PlayerId,
    pub action: TurnAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Orientation, Side};

    #[test]
    fn test_tile_of_action() {
        let opening = TurnAction::Opening { tile: TileId(27) };
        let play = TurnAction::Play {
            tile: TileId(17),
            placement: Placement::new(Side::Left, Orientation::AsIs),
        };

        assert_eq!(opening.tile(), Some(TileId(27)));
        assert_eq!(play.tile(), Some(TileId(17)));
        assert_eq!(TurnAction::Pass.tile(), None);
        assert!(TurnAction::Pass.is_pass());
        assert!(!play.is_pass());
    }

    #[test]
    fn test_record_serde() {
        let record = TurnRecord {
            turn: 3,
            player: PlayerId::new(2),
            action: TurnAction::Pass,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: TurnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
