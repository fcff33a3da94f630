//! Seats, seat-indexed storage and player descriptions.
//!
//! ## PlayerId
//!
//! Seat index into the turn order. Tokens on the board carry the seat of
//! their owner, so a `PlayerId` is all the identity a token has.
//!
//! ## PlayerMap
//!
//! Per-seat counters (`unplaced`, `exited`) backed by a `Vec` for O(1) access.
//!
//! ## PlayerInfo
//!
//! The externally visible description of a seat: string id, display name,
//! color, and whether a human or a bot controls it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat in the turn order (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that moves after this one in a game of `player_count` seats.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count.max(1)) as u8)
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use five_slide::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use five_slide::core::{PlayerId, PlayerMap};
///
/// let mut exited: PlayerMap<u8> = PlayerMap::with_value(2, 0);
/// exited[PlayerId(1)] += 2;
/// assert_eq!(exited[PlayerId(1)], 2);
/// assert_eq!(exited[PlayerId(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= u8::MAX as usize, "At most 255 seats supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a map with all entries set to the same value.
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

/// Who controls a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Bot,
}

/// Bot strength tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Description of one seat.
///
/// `difficulty` is only consulted when `kind` is [`PlayerKind::Bot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Unique identifier (e.g. a connection or color key).
    pub id: String,
    pub name: String,
    pub color: String,
    pub kind: PlayerKind,
    pub difficulty: Option<Difficulty>,
}

impl PlayerInfo {
    /// A human-controlled seat.
    #[must_use]
    pub fn human(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            kind: PlayerKind::Human,
            difficulty: None,
        }
    }

    /// A bot-controlled seat.
    #[must_use]
    pub fn bot(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            kind: PlayerKind::Bot,
            difficulty: Some(difficulty),
        }
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }
}
