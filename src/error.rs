//! Error types for the fallible edges of the crate.
//!
//! The rules engine itself never fails: illegal requests produce no effect.
//! These errors cover match setup, the session layer, bot configuration and
//! snapshot encoding.

use crate::core::{Action, PlayerId};

/// Errors creating a game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a match needs 1 to 8 players, got {0}")]
    PlayerCount(usize),

    #[error("duplicate player id: {0}")]
    DuplicatePlayer(String),

    #[error("expected {expected} per-seat entries, got {actual}")]
    SeatCountMismatch { expected: usize, actual: usize },

    #[error("seat {0} does not exist")]
    InvalidSeat(u8),

    #[error("player {player} would own {count} tokens (max 7)")]
    TooManyTokens { player: String, count: usize },

    #[error("space {space} holds {len} tokens (max 5)")]
    StackOverflow { space: usize, len: usize },

    #[error("player {player} accounts for {count} tokens, expected 7")]
    TokenCount { player: String, count: usize },

    #[error("winner does not match the exit counts")]
    WinnerMismatch,
}

/// Errors submitting actions through a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("the game is already over")]
    GameOver,

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("not {actual}'s turn (waiting on {expected})")]
    NotYourTurn { expected: String, actual: String },

    #[error("action not currently legal: {0}")]
    IllegalAction(Action),

    #[error("bot ticket is stale (issued at version {issued}, now {current})")]
    StaleTicket { issued: u64, current: u64 },

    #[error("{0} is not controlled by a bot")]
    NotABot(PlayerId),

    #[error("no legal action available")]
    NoLegalAction,
}

/// Errors loading bot configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Errors encoding or decoding a state snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot holds an invalid state: {0}")]
    Invalid(#[from] SetupError),
}
