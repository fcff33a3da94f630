//! State model: seats, board, actions, game snapshots, RNG.
//!
//! Everything here is plain data. Transitions live in `rules`.

pub mod action;
pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Direction};
pub use board::{Block, Board, Stack, EXITS_TO_WIN, SPACE_COUNT, STACK_CAPACITY, TOKENS_PER_PLAYER};
pub use player::{Difficulty, PlayerId, PlayerInfo, PlayerKind, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, MAX_PLAYERS, MIN_PLAYERS};
