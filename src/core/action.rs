//! Action representation.
//!
//! Three action shapes exist:
//! - `Move`: carry the top `count` same-owner tokens from a space one step
//!   forward or backward, sliding past full spaces.
//! - `Place`: put one reserve token onto the computed placement space.
//! - `Bubble`: lift one of your own pinned tokens to the top of its stack.
//!
//! Actions compare structurally, so legality gating is a plain
//! `contains` against the enumerated legal set.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Direction of a move along the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward space 8 and the exit.
    Forward,
    /// Toward space 1. Never exits.
    Backward,
}

impl Direction {
    /// Index delta of one step.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A complete game action.
///
/// ```
/// use five_slide::core::{Action, Direction};
///
/// let a = Action::Move { from: 2, direction: Direction::Forward, count: 1 };
/// let b = Action::Move { from: 2, direction: Direction::Forward, count: 1 };
/// assert_eq!(a, b);
/// assert_ne!(a, Action::Place);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Move {
        from: usize,
        direction: Direction,
        count: usize,
    },
    Place,
    Bubble {
        space: usize,
        token_index: usize,
    },
}

impl Action {
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move { .. })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, direction, count } => {
                write!(f, "move {} from space {} {}", count, from + 1, direction)
            }
            Action::Place => write!(f, "place"),
            Action::Bubble { space, token_index } => {
                write!(f, "bubble token {} at space {}", token_index, space + 1)
            }
        }
    }
}

/// A recorded action with the seat that took it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
