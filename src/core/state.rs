//! Game state.
//!
//! `GameState` holds everything about one game: the 28 tiles with their
//! owners, the four players, the board, whose turn it is, and the history.
//!
//! Only `rules::TurnEngine` mutates it. Everyone else (drivers, observers,
//! strategies) gets `&GameState`, and every accessor here returns either a
//! shared reference or an owned snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::Board;
use crate::tiles::{Tile, TileId, TileOwner};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Dealt, double-six not yet laid.
    AwaitingStart,
    InProgress,
    Won(PlayerId),
    /// A full round of passes with nobody out.
    Drawn,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Drawn)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) board: Board,
    pub(crate) current_player: PlayerId,
    pub(crate) turns_taken: u32,
    pub(crate) consecutive_passes: u8,
    pub(crate) status: GameStatus,
    pub(crate) history: Vector<TurnRecord>,
}

impl GameState {
    /// A freshly dealt game waiting for the double-six.
    #[must_use]
    pub fn new(tiles: Vec<Tile>, players: PlayerMap<Player>) -> Self {
        Self {
            tiles,
            players,
            board: Board::new(),
            current_player: PlayerId::new(0),
            turns_taken: 0,
            consecutive_passes: 0,
            status: GameStatus::AwaitingStart,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        self.board.open_ends()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Engine turns taken so far (plays and passes, not the opening).
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Tiles a player still holds, in tile order.
    pub fn hand_tiles(&self, player: PlayerId) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.is_held_by(player))
            .map(|(i, t)| (TileId(i as u8), t))
    }

    /// Owned snapshot of a player's hand for display.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<(TileId, Tile)> {
        self.hand_tiles(player).map(|(id, t)| (id, t.clone())).collect()
    }

    /// Number of tiles in `owner`'s state, counted from the tile list.
    #[must_use]
    pub fn count_owned(&self, owner: TileOwner) -> usize {
        self.tiles.iter().filter(|t| t.owner == owner).count()
    }
}
