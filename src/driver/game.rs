//! Game driver: setup → start → turn loop → report.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::observer::{GameEvent, GameObserver};
use crate::core::{GameConfig, GameError, GameRng, GameState, GameStatus, PlayerId};
use crate::rules::{TurnEngine, TurnOutcome};
use crate::strategy::{FirstLegal, SelectionStrategy, StrategyKind};

/// Why the game loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Win,
    /// Four passes in a row.
    Stalemate,
    /// `max_turns` hit first. The game is still `InProgress`.
    TurnLimit,
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub seed: u64,
    pub starter: PlayerId,
    pub status: GameStatus,
    pub end_reason: EndReason,
    pub turns_taken: u32,
    pub final_state: GameState,
}

impl GameReport {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.final_state.winner()
    }

    #[must_use]
    pub fn board_len(&self) -> usize {
        self.final_state.board().len()
    }
}

/// Runs one game with one strategy per seat.
pub struct GameDriver {
    config: GameConfig,
    rng: GameRng,
    strategies: Vec<Box<dyn SelectionStrategy>>,
}

impl GameDriver {
    /// Every seat plays `FirstLegal` until told otherwise.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let strategies = (0..config.player_count)
            .map(|_| Box::new(FirstLegal) as Box<dyn SelectionStrategy>)
            .collect();
        Self {
            config,
            rng,
            strategies,
        }
    }

    /// The seed actually used for the deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Replace one seat's strategy.
    #[must_use]
    pub fn with_strategy(mut self, seat: PlayerId, strategy: Box<dyn SelectionStrategy>) -> Self {
        if let Some(slot) = self.strategies.get_mut(seat.index()) {
            *slot = strategy;
        }
        self
    }

    /// Give every seat a strategy of the same kind. Randomized strategies
    /// get a per-seat stream derived from the game seed.
    #[must_use]
    pub fn with_strategy_kind(mut self, kind: StrategyKind) -> Self {
        for seat in 0..self.strategies.len() {
            let rng = self.rng.for_context(&format!("strategy-{seat}"));
            self.strategies[seat] = kind.build(rng);
        }
        self
    }

    /// Play one game to completion, reporting each step to `observer`.
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<GameReport, GameError> {
        let seed = self.seed();
        let mut deal_rng = self.rng.for_context("deal");
        let mut engine = TurnEngine::setup(&self.config, &mut deal_rng)?;
        info!(seed, "tiles dealt");
        observer.on_event(&GameEvent::Dealt, engine.state());

        let starter = engine.start().inspect_err(log_fatal)?;
        if let Some(opening) = engine.state().history().front() {
            observer.on_event(&GameEvent::from(opening), engine.state());
        }

        let end_reason = loop {
            match engine.state().status() {
                GameStatus::Won(_) => break EndReason::Win,
                GameStatus::Drawn => break EndReason::Stalemate,
                GameStatus::AwaitingStart | GameStatus::InProgress => {}
            }
            if let Some(max) = self.config.max_turns {
                let turns = engine.state().turns_taken();
                if turns >= max {
                    warn!(turns, "turn limit reached");
                    observer.on_event(&GameEvent::TurnLimitReached { turns }, engine.state());
                    break EndReason::TurnLimit;
                }
            }

            let seat = engine.state().current_player();
            let strategy = self.strategies[seat.index()].as_mut();
            let outcome = engine.play_turn(strategy).inspect_err(log_fatal)?;
            emit(observer, &outcome, engine.state());
        };

        let final_state = engine.into_state();
        Ok(GameReport {
            seed,
            starter,
            status: final_state.status(),
            end_reason,
            turns_taken: final_state.turns_taken(),
            final_state,
        })
    }
}

fn emit(observer: &mut dyn GameObserver, outcome: &TurnOutcome, state: &GameState) {
    observer.on_event(&GameEvent::from(&outcome.record), state);

    match outcome.status {
        GameStatus::Won(player) => observer.on_event(&GameEvent::Won { player }, state),
        GameStatus::Drawn => observer.on_event(&GameEvent::Drawn, state),
        GameStatus::AwaitingStart | GameStatus::InProgress => {}
    }
}

fn log_fatal(err: &GameError) {
    if let GameError::Invariant(violation) = err {
        error!(dump = %violation.dump, "{}", violation.message);
    }
}
