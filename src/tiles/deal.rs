//! Tile generation and dealing.

use tracing::debug;

use super::tile::{Tile, TileId, TileOwner, MAX_PIP, TILE_COUNT};
use crate::core::{GameRng, Player, PlayerMap, SetupError, HAND_SIZE, PLAYER_COUNT};

/// Generate the 28 tiles of a double-six set, all unassigned.
///
/// Order is lexicographic by `(low, high)`: `(0,0), (0,1), … (6,6)`.
#[must_use]
pub fn generate_tiles() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    for low in 0..=MAX_PIP {
        for high in low..=MAX_PIP {
            tiles.push(Tile::new(low, high));
        }
    }
    tiles
}

/// Deal `HAND_SIZE` tiles to each of the four players, without replacement.
///
/// The 28 tile indices are shuffled and sliced into consecutive hands, which
/// samples each hand uniformly among the remaining unassigned tiles.
///
/// Fails without touching anything if the table is not four fresh players
/// and 28 unassigned tiles.
pub fn assign_tiles(
    tiles: &mut [Tile],
    players: &mut PlayerMap<Player>,
    rng: &mut GameRng,
) -> Result<(), SetupError> {
    if players.player_count() != PLAYER_COUNT {
        return Err(SetupError::PlayerCount {
            expected: PLAYER_COUNT,
            actual: players.player_count(),
        });
    }
    if tiles.len() != TILE_COUNT {
        return Err(SetupError::TileCount {
            expected: TILE_COUNT,
            actual: tiles.len(),
        });
    }
    if let Some((i, tile)) = tiles
        .iter()
        .enumerate()
        .find(|(_, t)| t.owner != TileOwner::Unassigned)
    {
        return Err(SetupError::TileNotFresh {
            tile: TileId(i as u8),
            owner: tile.owner,
        });
    }
    if let Some(player) = players.values().find(|p| p.hand_count != 0) {
        return Err(SetupError::HandNotEmpty {
            player: player.id,
            count: player.hand_count,
        });
    }

    let mut order: Vec<usize> = (0..TILE_COUNT).collect();
    rng.shuffle(&mut order);

    for (seat, hand) in players.player_ids().zip(order.chunks(HAND_SIZE)) {
        for &i in hand {
            tiles[i].owner = TileOwner::Player(seat);
        }
        players[seat].hand_count = hand.len() as u8;
        debug!(player = %seat, tiles = ?hand, "dealt hand");
    }

    Ok(())
}
