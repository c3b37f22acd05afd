//! Internal consistency checks on `GameState`.
//!
//! Any failure here is an engine bug. The violation carries a full state
//! dump and is never retried.

use rustc_hash::FxHashSet;

use crate::core::{EngineInvariantViolation, GameState, GameStatus, HAND_SIZE, PLAYER_COUNT};
use crate::tiles::{TileOwner, MAX_PIP, TILE_COUNT};

/// Check every bookkeeping invariant the engine relies on.
pub fn check(state: &GameState) -> Result<(), EngineInvariantViolation> {
    check_table(state)
        .and_then(|()| check_tiles(state))
        .and_then(|()| check_hands(state))
        .and_then(|()| check_board(state))
        .and_then(|()| check_status(state))
        .map_err(|message| EngineInvariantViolation {
            message,
            dump: format!("{state:#?}"),
        })
}

fn check_table(state: &GameState) -> Result<(), String> {
    if state.player_count() != PLAYER_COUNT {
        return Err(format!(
            "{} seats at the table, expected {PLAYER_COUNT}",
            state.player_count()
        ));
    }
    if state.current_player.index() >= state.player_count() {
        return Err(format!("current seat {} is not at the table", state.current_player.0));
    }
    Ok(())
}

fn check_tiles(state: &GameState) -> Result<(), String> {
    if state.tiles.len() != TILE_COUNT {
        return Err(format!("{} tiles in play, expected {TILE_COUNT}", state.tiles.len()));
    }

    let mut seen = FxHashSet::default();
    for (i, tile) in state.tiles.iter().enumerate() {
        if tile.low() > tile.high() || tile.high() > MAX_PIP {
            return Err(format!("tile {i} has bad pips {:?}", tile.pips()));
        }
        if !seen.insert(tile.pips()) {
            return Err(format!("tile {i} {tile} appears twice"));
        }
        if let TileOwner::Player(p) = tile.owner {
            if p.index() >= state.player_count() {
                return Err(format!("tile {i} owned by unknown seat {}", p.0));
            }
        }
    }
    Ok(())
}

fn check_hands(state: &GameState) -> Result<(), String> {
    for (id, player) in state.players.iter() {
        if player.id != id {
            return Err(format!("seat {} holds player record for {}", id.0, player.id));
        }
        let owned = state.count_owned(TileOwner::Player(id));
        if owned != player.hand_count as usize {
            return Err(format!(
                "{} hand_count is {} but owns {owned} tiles",
                id, player.hand_count
            ));
        }
        if owned > HAND_SIZE {
            return Err(format!("{id} holds {owned} tiles, more than {HAND_SIZE}"));
        }
    }
    Ok(())
}

fn check_board(state: &GameState) -> Result<(), String> {
    let board = &state.board;

    let mut on_board = FxHashSet::default();
    for placed in board.tiles() {
        if !on_board.insert(placed.tile) {
            return Err(format!("tile {} placed twice", placed.tile));
        }
        let tile = match state.tile(placed.tile) {
            Some(tile) if tile.owner == TileOwner::Played => tile,
            Some(tile) => {
                return Err(format!("tile {} on board but owner is {}", placed.tile, tile.owner));
            }
            None => return Err(format!("board references missing tile {}", placed.tile)),
        };
        let (low, high) = tile.pips();
        if (placed.left, placed.right) != (low, high) && (placed.left, placed.right) != (high, low) {
            return Err(format!("board shows {placed} for tile {} {tile}", placed.tile));
        }
    }

    let played = state.count_owned(TileOwner::Played);
    if played != board.len() {
        return Err(format!("{played} tiles marked played, {} on board", board.len()));
    }

    let mut chain = board.tiles();
    if let Some(mut prev) = chain.next() {
        for next in chain {
            if prev.right != next.left {
                return Err(format!("{prev} does not join {next}"));
            }
            prev = next;
        }
    }

    let expected_ends = board
        .leftmost()
        .zip(board.rightmost())
        .map(|(l, r)| (l.left, r.right));
    if board.open_ends() != expected_ends {
        return Err(format!(
            "open ends {:?} disagree with outer tiles {:?}",
            board.open_ends(),
            expected_ends
        ));
    }
    Ok(())
}

fn check_status(state: &GameState) -> Result<(), String> {
    let anyone_out = state.players.values().any(|p| p.is_out());
    match state.status {
        GameStatus::AwaitingStart if !state.board.is_empty() => {
            Err("board has tiles before the game started".to_string())
        }
        GameStatus::InProgress if state.board.is_empty() => {
            Err("game in progress with an empty board".to_string())
        }
        GameStatus::InProgress if anyone_out => {
            Err("a player is out but the game is still in progress".to_string())
        }
        GameStatus::Won(p) if !state.players[p].is_out() => {
            Err(format!("{p} declared winner while holding tiles"))
        }
        _ if state.consecutive_passes as usize > state.player_count() => Err(format!(
            "{} consecutive passes at a table of {}",
            state.consecutive_passes,
            state.player_count()
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Orientation, Placement, Side};
    use crate::core::{GameRng, Player, PlayerId, PlayerMap};
    use crate::rules::TurnEngine;
    use crate::tiles::{assign_tiles, generate_tiles, Tile, TileId};

    fn started() -> GameState {
        let mut tiles = generate_tiles();
        let mut players = PlayerMap::new(4, |id| Player::new(id, "p"));
        assign_tiles(&mut tiles, &mut players, &mut GameRng::new(11)).unwrap();
        let mut engine = TurnEngine::new(GameState::new(tiles, players));
        engine.start().unwrap();
        engine.into_state()
    }

    #[test]
    fn test_fresh_and_started_states_pass() {
        let mut tiles = generate_tiles();
        let mut players = PlayerMap::new(4, |id| Player::new(id, "p"));
        assign_tiles(&mut tiles, &mut players, &mut GameRng::new(11)).unwrap();
        assert!(check(&GameState::new(tiles, players)).is_ok());

        assert!(check(&started()).is_ok());
    }

    #[test]
    fn test_detects_hand_count_drift() {
        let mut state = started();
        state.players[PlayerId::new(0)].hand_count += 1;

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("hand_count"), "{}", err.message);
        assert!(err.dump.contains("GameState"));
    }

    #[test]
    fn test_detects_played_tile_missing_from_board() {
        let mut state = started();
        let (id, seat) = state
            .tiles
            .iter()
            .enumerate()
            .find_map(|(i, t)| match t.owner {
                TileOwner::Player(p) => Some((i, p)),
                _ => None,
            })
            .unwrap();
        state.tiles[id].owner = TileOwner::Played;
        state.players[seat].hand_count -= 1;

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("on board"), "{}", err.message);
    }

    #[test]
    fn test_detects_premature_winner() {
        let mut state = started();
        state.status = GameStatus::Won(PlayerId::new(2));

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("declared winner"), "{}", err.message);
    }

    #[test]
    fn test_detects_wrong_tile_count() {
        let mut state = started();
        state.tiles.pop();

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("27 tiles"), "{}", err.message);
    }

    #[test]
    fn test_detects_seat_off_the_table() {
        let mut state = started();
        state.current_player = PlayerId::new(9);

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("current seat 9"), "{}", err.message);
    }

    #[test]
    fn test_detects_short_table() {
        let state = GameState::new(generate_tiles(), PlayerMap::new(3, |id| Player::new(id, "p")));

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("3 seats"), "{}", err.message);
    }

    #[test]
    fn test_detects_board_pips_that_disagree_with_tile() {
        let mut state = started();
        let mut forged = Board::new();
        forged.place(
            TileId(27),
            &Tile::new(0, 1),
            Placement::new(Side::Right, Orientation::AsIs),
        );
        state.board = forged;

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("board shows | 0 | 1 |"), "{}", err.message);
    }

    #[test]
    fn test_detects_unnormalized_pips() {
        let mut state = started();
        let flipped: Tile = serde_json::from_str(r#"{"low":5,"high":2,"owner":"Unassigned"}"#).unwrap();
        let slot = state
            .tiles
            .iter()
            .position(|t| t.pips() == (2, 5))
            .unwrap();
        let owner = state.tiles[slot].owner;
        state.tiles[slot] = flipped.owned_by(owner);

        let err = check(&state).unwrap_err();
        assert!(err.message.contains("bad pips (5, 2)"), "{}", err.message);
    }
}
