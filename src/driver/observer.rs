//! Game events and the observers that consume them.
//!
//! Observers are the display collaborator. They run between turns and see
//! only `&GameState`.

use crate::board::Placement;
use crate::core::{GameState, PlayerId, TurnAction, TurnRecord};
use crate::tiles::TileId;

/// Something that happened, emitted after the state has been updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Dealt,
    Started { starter: PlayerId, tile: TileId },
    Played { player: PlayerId, tile: TileId, placement: Placement },
    Passed { player: PlayerId },
    Won { player: PlayerId },
    Drawn,
    TurnLimitReached { turns: u32 },
}

impl From<&TurnRecord> for GameEvent {
    fn from(record: &TurnRecord) -> Self {
        let player = record.player;
        match record.action {
            TurnAction::Opening { tile } => GameEvent::Started { starter: player, tile },
            TurnAction::Play { tile, placement } => GameEvent::Played { player, tile, placement },
            TurnAction::Pass => GameEvent::Passed { player },
        }
    }
}

pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent, _state: &GameState) {}
}

/// Keeps every event, in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent, _state: &GameState) {
        self.events.push(*event);
    }
}
