//! # five-slide
//!
//! Rules engine and computer opponents for *Five & Slide*, a turn-based
//! stacking race for 1-8 players.
//!
//! ## The game
//!
//! - Eight spaces in a row, each holding a stack of at most five tokens.
//! - Every player owns seven tokens, starting in reserve.
//! - On your turn you move the top run of your own tokens one step forward
//!   or backward, place a reserve token, or (when nothing else is possible)
//!   bubble one of your covered tokens to the top of its stack.
//! - Blocks slide past full spaces and split when they only partly fit.
//! - Moving forward past space 8 exits tokens. Five exits win.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: `GameState` values are never edited in
//!    place; every transition returns a fresh state.
//!
//! 2. **Total engine**: the rules never fail. Illegal requests produce an
//!    unchanged state; enumeration never proposes them.
//!
//! 3. **Closed strategy set**: bot tiers are an enum, dispatched by `match`.
//!
//! ## Modules
//!
//! - `core`: seats, board, actions, state snapshots, RNG
//! - `rules`: legal actions, move resolution, placement, transitions
//! - `bot`: heuristic evaluation and the easy/medium/hard strategies
//! - `session`: single-writer match controller and snapshots
//! - `error`: error types for setup, sessions, config and snapshots

pub mod bot;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, Difficulty, Direction, GameRng, GameState, PlayerId, PlayerInfo,
    PlayerKind, PlayerMap, Stack,
};

pub use crate::rules::{
    apply_action, create_initial_state, is_legal, is_terminal, legal_actions, GameResult, Landing,
};

pub use crate::bot::{choose_bot_action, BotConfig, BotPlayer, ReplyModel};

pub use crate::session::{BotTicket, Session};

pub use crate::error::{ActionError, ConfigError, SetupError, SnapshotError};
