//! Seats, players and per-seat storage.
//!
//! ## PlayerId
//!
//! Zero-based seat index. Seat 0 is the first player in turn order;
//! `Display` renders the one-based seat number players see at the table.
//!
//! ## PlayerMap
//!
//! One value per seat, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The seat that plays after this one at a table of `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count`.
    ///
    /// ```
    /// use domino_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A seated player.
///
/// `hand_count` caches how many tiles the player still owns. The tile list
/// is the source of truth; `rules::invariants` checks the two agree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand_count: u8,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand_count: 0,
        }
    }

    /// True once the player has played every tile they were dealt.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand_count == 0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Tiles: {})", self.name, self.hand_count)
    }
}

/// Per-seat storage with O(1) access.
///
/// ## Example
///
/// ```
/// use domino_engine::core::{PlayerId, PlayerMap};
///
/// let mut passes: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// passes[PlayerId::new(2)] += 1;
/// assert_eq!(passes[PlayerId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map by calling `factory` once per seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display_is_one_based() {
        assert_eq!(PlayerId::new(0).number(), 1);
        assert_eq!(format!("{}", PlayerId::new(1)), "Player 2");
    }

    #[test]
    fn test_next_wraps_around_table() {
        assert_eq!(PlayerId::new(0).next(4), PlayerId::new(1));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    }

    #[test]
    fn test_new_player_holds_nothing() {
        let player = Player::new(PlayerId::new(2), "Akasha");
        assert_eq!(player.hand_count, 0);
        assert!(player.is_out());
        assert_eq!(format!("{}", player), "Akasha (Tiles: 0)");
    }

    #[test]
    fn test_player_map_indexing() {
        let mut map: PlayerMap<Player> =
            PlayerMap::new(4, |id| Player::new(id, format!("seat-{}", id.index())));

        map[PlayerId::new(3)].hand_count = 7;

        assert_eq!(map.player_count(), 4);
        assert_eq!(map[PlayerId::new(3)].hand_count, 7);
        assert_eq!(map[PlayerId::new(0)].name, "seat-0");
        assert_eq!(map.values().map(|p| p.hand_count as u32).sum::<u32>(), 7);
    }

    #[test]
    fn test_player_map_iter_in_seat_order() {
        let map: PlayerMap<u8> = PlayerMap::new(3, |p| p.0 * 2);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId(0), &0), (PlayerId(1), &2), (PlayerId(2), &4)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<Player> = PlayerMap::new(2, |id| Player::new(id, "x"));
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<Player> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u8> = PlayerMap::with_value(0, 0);
    }
}
