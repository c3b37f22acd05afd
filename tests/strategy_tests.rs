//! Strategies and the driver: determinism, misbehaving strategies,
//! snapshots.

use domino_engine::{
    EndReason, EventLog, GameConfig, GameDriver, GameError, GameEvent, GameRng, GameRngState,
    GameState, GameStatus, HeaviestTile, IllegalMoveError, NullObserver, PlayerId, RandomLegal,
    SelectionStrategy, StrategyKind, TileId, TurnEngine,
};

/// Always names the same tile, legal or not.
struct Stubborn(TileId);

impl SelectionStrategy for Stubborn {
    fn name(&self) -> &str {
        "stubborn"
    }

    fn select(&mut self, _legal: &[TileId], _state: &GameState) -> Option<TileId> {
        Some(self.0)
    }
}

/// Never picks anything.
struct Sulk;

impl SelectionStrategy for Sulk {
    fn name(&self) -> &str {
        "sulk"
    }

    fn select(&mut self, _legal: &[TileId], _state: &GameState) -> Option<TileId> {
        None
    }
}

/// Checks every offered tile against the state before deferring to
/// `FirstLegal` ordering.
#[derive(Default)]
struct Auditor {
    calls: usize,
}

impl SelectionStrategy for Auditor {
    fn name(&self) -> &str {
        "auditor"
    }

    fn select(&mut self, legal: &[TileId], state: &GameState) -> Option<TileId> {
        self.calls += 1;
        assert!(!legal.is_empty());
        assert!(legal.windows(2).all(|w| w[0] < w[1]));
        let (left, right) = state.open_ends().unwrap();
        let seat = state.current_player();
        for &id in legal {
            let tile = state.tile(id).unwrap();
            assert!(tile.is_held_by(seat));
            assert!(tile.has_pip(left) || tile.has_pip(right));
        }
        legal.first().copied()
    }
}

fn started(seed: u64) -> TurnEngine {
    let mut engine = TurnEngine::setup(&GameConfig::default(), &mut GameRng::new(seed)).unwrap();
    engine.start().unwrap();
    engine
}

fn unplayable_for_current(engine: &TurnEngine) -> Option<TileId> {
    let state = engine.state();
    state
        .hand_tiles(state.current_player())
        .map(|(id, _)| id)
        .find(|&id| !engine.is_legal_for_current(id))
}

#[test]
fn test_random_games_replay_from_seed() {
    for seed in [0, 1, 99, 12345] {
        let config = GameConfig::default().with_seed(seed);
        let mut first = EventLog::default();
        let mut second = EventLog::default();

        let a = GameDriver::new(config.clone())
            .with_strategy_kind(StrategyKind::Random)
            .run(&mut first)
            .unwrap();
        let b = GameDriver::new(config)
            .with_strategy_kind(StrategyKind::Random)
            .run(&mut second)
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(first.events, second.events);
    }
}

#[test]
fn test_every_kind_finishes() {
    for kind in [StrategyKind::First, StrategyKind::Random, StrategyKind::Heaviest] {
        for seed in 0..20 {
            let report = GameDriver::new(GameConfig::default().with_seed(seed))
                .with_strategy_kind(kind)
                .run(&mut NullObserver)
                .unwrap();
            assert!(report.status.is_terminal());
            assert_ne!(report.end_reason, EndReason::TurnLimit);
        }
    }
}

#[test]
fn test_strategy_sees_only_legal_tiles() {
    let mut engine = started(5);
    let mut auditor = Auditor::default();
    while !engine.state().is_terminal() {
        engine.play_turn(&mut auditor).unwrap();
    }
    assert!(auditor.calls > 0);
}

#[test]
fn test_heaviest_prefers_high_pips() {
    for seed in 0..30 {
        let mut engine = started(seed);
        let legal = engine.legal_tiles();
        if legal.len() < 2 {
            continue;
        }
        let best = legal
            .iter()
            .map(|&id| engine.state().tile(id).unwrap().pip_sum())
            .max()
            .unwrap();

        let outcome = engine.play_turn(&mut HeaviestTile).unwrap();
        let played = outcome.record.action.tile().unwrap();
        assert_eq!(engine.state().tile(played).unwrap().pip_sum(), best);
    }
}

#[test]
fn test_illegal_choice_is_rejected_without_mutation() {
    for seed in 0..50 {
        let mut engine = started(seed);
        if engine.legal_tiles().is_empty() {
            continue;
        }
        let Some(bad) = unplayable_for_current(&engine) else {
            continue;
        };
        let before = engine.state().clone();

        let err = engine.play_turn(&mut Stubborn(bad)).unwrap_err();

        assert_eq!(err, GameError::IllegalMove(IllegalMoveError::NoMatch { tile: bad }));
        assert_eq!(engine.state(), &before);
        return;
    }
    panic!("no seed produced a hand with an unplayable tile");
}

#[test]
fn test_declining_is_an_error() {
    let mut engine = started(3);
    while engine.legal_tiles().is_empty() {
        engine.pass_turn().unwrap();
    }
    let seat = engine.state().current_player();
    let before = engine.state().clone();

    let err = engine.play_turn(&mut Sulk).unwrap_err();

    assert_eq!(err, GameError::IllegalMove(IllegalMoveError::NoSelection { player: seat }));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_driver_surfaces_strategy_errors() {
    let config = GameConfig::default().with_seed(8);
    let mut log = EventLog::default();
    let mut driver = GameDriver::new(config);
    for seat in PlayerId::all(4) {
        driver = driver.with_strategy(seat, Box::new(Sulk));
    }

    let err = driver.run(&mut log).unwrap_err();

    assert!(matches!(
        err,
        GameError::IllegalMove(IllegalMoveError::NoSelection { .. })
    ));
    assert!(matches!(log.events.get(1), Some(GameEvent::Started { .. })));
}

#[test]
fn test_snapshot_resumes_the_same_game() {
    // Snapshot right after a play: the pass streak is not part of a resumed
    // position.
    let mut engine = started(21);
    while !engine.state().is_terminal()
        && (engine.state().turns_taken() < 5 || engine.state().consecutive_passes() > 0)
    {
        engine.play_turn(&mut HeaviestTile).unwrap();
    }
    let snapshot = serde_json::to_string(engine.state()).unwrap();
    let restored: GameState = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(&restored, engine.state());

    let mut resumed = TurnEngine::resume(
        restored.tiles().to_vec(),
        restored.players().clone(),
        restored.board().clone(),
        restored.current_player(),
    )
    .unwrap();

    while !engine.state().is_terminal() {
        let a = engine.play_turn(&mut HeaviestTile).unwrap();
        let b = resumed.play_turn(&mut HeaviestTile).unwrap();
        assert_eq!(a.record.action, b.record.action);
        assert_eq!(a.status, b.status);
    }
    assert_eq!(engine.state().board(), resumed.state().board());
    assert!(matches!(
        resumed.state().status(),
        GameStatus::Won(_) | GameStatus::Drawn
    ));
}

#[test]
fn test_snapshot_carries_random_choice_stream() {
    let mut engine = started(34);
    let mut strategy = RandomLegal::new(GameRng::new(34).for_context("strategy"));
    while !engine.state().is_terminal()
        && (engine.state().turns_taken() < 6 || engine.state().consecutive_passes() > 0)
    {
        engine.play_turn(&mut strategy).unwrap();
    }

    let game_json = serde_json::to_string(engine.state()).unwrap();
    let rng_json = serde_json::to_string(&strategy.rng_state()).unwrap();
    let restored: GameState = serde_json::from_str(&game_json).unwrap();
    let rng_state: GameRngState = serde_json::from_str(&rng_json).unwrap();

    let mut resumed = TurnEngine::resume(
        restored.tiles().to_vec(),
        restored.players().clone(),
        restored.board().clone(),
        restored.current_player(),
    )
    .unwrap();
    let mut resumed_strategy = RandomLegal::from_rng_state(&rng_state);

    while !engine.state().is_terminal() {
        let a = engine.play_turn(&mut strategy).unwrap();
        let b = resumed.play_turn(&mut resumed_strategy).unwrap();
        assert_eq!(a.record.action, b.record.action);
        assert_eq!(a.status, b.status);
    }
    assert_eq!(engine.state().board(), resumed.state().board());
}
