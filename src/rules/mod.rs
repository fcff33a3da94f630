//! Rules engine: pure functions from a state (and action) to a new state.
//!
//! Nothing here mutates its input. Callers gate every action with
//! `is_legal`/`legal_actions` and then call `apply_action`, which returns
//! a fresh snapshot.

pub mod engine;
pub mod movement;
pub mod placement;

pub use engine::{apply_action, bubble_options, is_legal, is_terminal, legal_actions, legal_moves, GameResult};
pub use movement::{predict_landing, resolve_move, Landing};
pub use placement::{can_place, placement_destination};

pub(crate) use engine::apply_unchecked;

use crate::core::{Action, Board, GameState, PlayerId, PlayerInfo};
use crate::error::SetupError;

/// Fresh match state for the given seats.
pub fn create_initial_state(players: Vec<PlayerInfo>) -> Result<GameState, SetupError> {
    GameState::new(players)
}

/// Lowest-indexed empty space on the board.
#[must_use]
pub fn lowest_empty_space(board: &Board) -> Option<usize> {
    board.lowest_empty_space()
}

/// Top-of-stack contiguous run of `player`'s tokens at `space`.
#[must_use]
pub fn top_run_length(board: &Board, space: usize, player: PlayerId) -> usize {
    board.top_run_length(space, player)
}

/// Whether the token at (`space`, `index`) has something on top of it.
#[must_use]
pub fn is_pinned(board: &Board, space: usize, index: usize) -> bool {
    board.is_pinned(space, index)
}

/// Landing for a move action by the player to act; `None` for other
/// action kinds or an illegal move.
#[must_use]
pub fn predict_action_landing(state: &GameState, action: &Action) -> Option<Landing> {
    match *action {
        Action::Move { from, direction, count } => {
            predict_landing(state.board(), state.current(), from, direction, count)
        }
        Action::Place | Action::Bubble { .. } => None,
    }
}
