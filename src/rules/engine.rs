//! The turn engine: the only thing that mutates `GameState`.
//!
//! ## Lifecycle
//!
//! `AwaitingStart` → `start()` lays the double-six → `InProgress` → one
//! `play_turn` (or `play_tile` / `pass_turn`) per seat → `Won` or `Drawn`.
//!
//! Each turn runs check-legal-moves → (pass | play) → check-win → advance.
//! A play that empties the player's hand wins on the spot. Four passes in a
//! row with nobody out is a blocked game and ends `Drawn`.
//!
//! ## Failure semantics
//!
//! Every public mutating method either commits a whole turn or returns an
//! error with the state untouched.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::invariants;
use super::placement::placement_for;
use crate::board::{Board, Placement};
use crate::core::{
    EngineInvariantViolation, GameConfig, GameError, GameRng, GameState, GameStatus,
    IllegalMoveError, NoStarterError, Player, PlayerId, PlayerMap, SetupError, TurnAction,
    TurnRecord, HAND_SIZE,
};
use crate::strategy::SelectionStrategy;
use crate::tiles::{assign_tiles, generate_tiles, Tile, TileId, TileOwner};

/// Legal tiles for one seat. A hand never exceeds `HAND_SIZE`.
pub type LegalTiles = SmallVec<[TileId; HAND_SIZE]>;

/// Result of one committed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub record: TurnRecord,
    /// Status after the turn.
    pub status: GameStatus,
}

impl TurnOutcome {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.record.player
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.record.action.is_pass()
    }
}

/// Drives one game from the deal to a win or a draw.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
}

impl TurnEngine {
    /// Wrap a dealt state without checking it. `start` validates before
    /// laying anything; `resume` validates arbitrary positions up front.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Generate the tiles, seat the players and deal.
    pub fn setup(config: &GameConfig, rng: &mut GameRng) -> Result<Self, SetupError> {
        config.validate()?;

        let mut tiles = generate_tiles();
        let mut players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.player_names[id.index()].clone())
        });
        assign_tiles(&mut tiles, &mut players, rng)?;

        Ok(Self::new(GameState::new(tiles, players)))
    }

    /// Pick up a game from an arbitrary position.
    ///
    /// Hand counts are recomputed from tile ownership; incoming values are
    /// ignored. Tiles marked `Played` must be exactly those on `board`. The
    /// game is `InProgress` if the board has tiles, otherwise it awaits the
    /// double-six.
    pub fn resume(
        tiles: Vec<Tile>,
        mut players: PlayerMap<Player>,
        board: Board,
        current_player: PlayerId,
    ) -> Result<Self, EngineInvariantViolation> {
        for seat in players.player_ids() {
            let owned = tiles.iter().filter(|t| t.is_held_by(seat)).count();
            players[seat].hand_count = owned as u8;
        }

        let mut state = GameState::new(tiles, players);
        if !board.is_empty() {
            state.status = GameStatus::InProgress;
        }
        state.board = board;
        state.current_player = current_player;

        invariants::check(&state)?;
        Ok(Self::new(state))
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn check_invariants(&self) -> Result<(), EngineInvariantViolation> {
        invariants::check(&self.state)
    }

    /// The double-six and whoever holds it.
    pub fn find_starter(&self) -> Result<(TileId, PlayerId), NoStarterError> {
        self.state
            .tiles
            .iter()
            .enumerate()
            .find(|(_, t)| t.is_double_six())
            .and_then(|(i, t)| match t.owner {
                TileOwner::Player(p) => Some((TileId(i as u8), p)),
                _ => None,
            })
            .ok_or(NoStarterError)
    }

    /// Lay the double-six for its holder and hand the turn to the next seat.
    ///
    /// This is the one forced move: no legality check, since an empty board
    /// accepts anything. Returns the starting player.
    ///
    /// A state built with `new` is checked here first; an inconsistent deal
    /// is an `EngineInvariantViolation` and nothing is laid.
    pub fn start(&mut self) -> Result<PlayerId, GameError> {
        if self.state.status != GameStatus::AwaitingStart {
            return Err(IllegalMoveError::AlreadyStarted.into());
        }
        self.check_invariants()?;
        let (tile_id, starter) = self.find_starter()?;

        let state = &mut self.state;
        let tile = &mut state.tiles[tile_id.index()];
        state.board.place(tile_id, tile, Placement::opening());
        tile.owner = TileOwner::Played;
        state.players[starter].hand_count -= 1;
        state.history.push_back(TurnRecord {
            turn: 0,
            player: starter,
            action: TurnAction::Opening { tile: tile_id },
        });
        state.status = GameStatus::InProgress;
        state.current_player = starter.next(state.player_count());

        info!(
            player = %starter,
            name = %state.players[starter].name,
            "starts with the double-six"
        );

        self.check_invariants()?;
        Ok(starter)
    }

    /// Would `tile` be a legal play for the current player right now?
    #[must_use]
    pub fn is_legal_for_current(&self, tile: TileId) -> bool {
        self.validate_play(tile).is_ok()
    }

    /// Tiles the current player may lay, in tile order.
    #[must_use]
    pub fn legal_tiles(&self) -> LegalTiles {
        if self.state.status != GameStatus::InProgress {
            return LegalTiles::new();
        }
        let board = &self.state.board;
        self.state
            .hand_tiles(self.state.current_player)
            .filter(|(_, t)| placement_for(t, board).is_some())
            .map(|(id, _)| id)
            .collect()
    }

    /// Check a play without committing it.
    pub fn validate_play(&self, id: TileId) -> Result<Placement, IllegalMoveError> {
        self.ensure_in_progress()?;

        let player = self.state.current_player;
        let tile = self
            .state
            .tile(id)
            .ok_or(IllegalMoveError::OutOfRange { tile: id })?;
        if !tile.is_held_by(player) {
            return Err(IllegalMoveError::NotOwned { tile: id, player });
        }
        placement_for(tile, &self.state.board).ok_or(IllegalMoveError::NoMatch { tile: id })
    }

    /// Lay `id` for the current player as a full turn: place, check for a
    /// win, advance.
    pub fn play_tile(&mut self, id: TileId) -> Result<TurnOutcome, IllegalMoveError> {
        let placement = self.validate_play(id).inspect_err(|err| {
            debug!(player = %self.state.current_player, tile = %id, %err, "rejected play");
        })?;
        Ok(self.commit_play(id, placement))
    }

    /// Pass for the current player. Only allowed with no legal tile.
    pub fn pass_turn(&mut self) -> Result<TurnOutcome, IllegalMoveError> {
        self.ensure_in_progress()?;
        if !self.legal_tiles().is_empty() {
            return Err(IllegalMoveError::MustPlay {
                player: self.state.current_player,
            });
        }
        Ok(self.commit_pass())
    }

    /// Run one turn for the current player, letting `strategy` choose among
    /// the legal tiles. Passes without consulting it if there are none.
    pub fn play_turn(
        &mut self,
        strategy: &mut dyn SelectionStrategy,
    ) -> Result<TurnOutcome, GameError> {
        self.ensure_in_progress()?;

        let player = self.state.current_player;
        let legal = self.legal_tiles();
        let outcome = if legal.is_empty() {
            self.commit_pass()
        } else {
            let choice = strategy
                .select(&legal, &self.state)
                .ok_or(IllegalMoveError::NoSelection { player })?;
            let placement = self.validate_play(choice).inspect_err(|err| {
                warn!(
                    strategy = strategy.name(),
                    %player,
                    tile = %choice,
                    %err,
                    "strategy chose an illegal tile"
                );
            })?;
            self.commit_play(choice, placement)
        };

        self.check_invariants()?;
        Ok(outcome)
    }

    fn ensure_in_progress(&self) -> Result<(), IllegalMoveError> {
        match self.state.status {
            GameStatus::AwaitingStart => Err(IllegalMoveError::NotStarted),
            GameStatus::InProgress => Ok(()),
            GameStatus::Won(_) | GameStatus::Drawn => Err(IllegalMoveError::GameOver),
        }
    }

    fn commit_play(&mut self, id: TileId, placement: Placement) -> TurnOutcome {
        let state = &mut self.state;
        let player = state.current_player;

        let tile = &mut state.tiles[id.index()];
        state.board.place(id, tile, placement);
        tile.owner = TileOwner::Played;
        state.players[player].hand_count -= 1;
        state.consecutive_passes = 0;

        debug!(
            %player,
            tile = %id,
            side = ?placement.side,
            ends = ?state.board.open_ends(),
            "played tile"
        );

        let record = self.record(TurnAction::Play { tile: id, placement });

        if self.state.players[player].is_out() {
            self.state.status = GameStatus::Won(player);
            info!(%player, name = %self.state.players[player].name, "wins");
        } else {
            self.advance();
        }

        TurnOutcome {
            record,
            status: self.state.status,
        }
    }

    fn commit_pass(&mut self) -> TurnOutcome {
        let player = self.state.current_player;
        self.state.consecutive_passes += 1;
        debug!(%player, passes = self.state.consecutive_passes, "passed");

        let record = self.record(TurnAction::Pass);

        if self.state.consecutive_passes as usize >= self.state.player_count() {
            self.state.status = GameStatus::Drawn;
            info!(turns = self.state.turns_taken, "blocked, game drawn");
        } else {
            self.advance();
        }

        TurnOutcome {
            record,
            status: self.state.status,
        }
    }

    fn record(&mut self, action: TurnAction) -> TurnRecord {
        self.state.turns_taken += 1;
        let record = TurnRecord {
            turn: self.state.turns_taken,
            player: self.state.current_player,
            action,
        };
        self.state.history.push_back(record);
        record
    }

    fn advance(&mut self) {
        self.state.current_player = self.state.current_player.next(self.state.player_count());
    }
}
