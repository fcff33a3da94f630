//! Legal action enumeration and state transitions.
//!
//! Legality follows a strict priority:
//! 1. Any legal move: all legal moves, plus `Place` if it is also legal.
//! 2. Otherwise `Place` alone, if legal.
//! 3. Otherwise every legal bubble (possibly none).
//!
//! Enumeration order is stable: moves by source space, forward before
//! backward, then by count; `Place` last; bubbles by space then token index.
//! Bots break ties by this order.

use log::trace;

use super::movement::resolve_move;
use super::placement::{can_place, placement_destination};
use crate::core::{
    Action, ActionRecord, Direction, GameState, PlayerId, SPACE_COUNT, STACK_CAPACITY,
};

/// Outcome of a finished (or stuck) match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A seat reached five exits.
    Winner(PlayerId),
    /// No winner, but the seat to act has no legal action.
    Blocked(PlayerId),
}

/// Every legal move for the player to act.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Action> {
    let player = state.current();
    let board = state.board();
    let mut moves = Vec::new();

    for from in 0..SPACE_COUNT {
        let run = board.top_run_length(from, player).min(STACK_CAPACITY);
        if run == 0 {
            continue;
        }
        for direction in [Direction::Forward, Direction::Backward] {
            for count in 1..=run {
                if resolve_move(board, player, from, direction, count).is_some() {
                    moves.push(Action::Move { from, direction, count });
                }
            }
        }
    }

    moves
}

/// Bubble options: each pinned token owned by the player to act.
#[must_use]
pub fn bubble_options(state: &GameState) -> Vec<Action> {
    let player = state.current();

    state
        .board()
        .spaces()
        .iter()
        .enumerate()
        .flat_map(|(space, stack)| {
            stack
                .tokens()
                .iter()
                .enumerate()
                .filter(move |&(index, &owner)| owner == player && stack.is_pinned(index))
                .map(move |(token_index, _)| Action::Bubble { space, token_index })
        })
        .collect()
}

/// All actions the player to act may take. Empty once the game is won.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.is_over() {
        return Vec::new();
    }

    let mut actions = legal_moves(state);
    let place = can_place(state);

    if !actions.is_empty() {
        if place {
            actions.push(Action::Place);
        }
        actions
    } else if place {
        vec![Action::Place]
    } else {
        bubble_options(state)
    }
}

/// Whether `action` is in the current legal set.
#[must_use]
pub fn is_legal(state: &GameState, action: &Action) -> bool {
    legal_actions(state).contains(action)
}

/// Apply `action`, returning the successor state.
///
/// Illegal actions and actions after the game is won return an unchanged
/// copy of `state`.
#[must_use]
pub fn apply_action(state: &GameState, action: &Action) -> GameState {
    if !is_legal(state, action) {
        trace!("ignoring illegal action {action} for {}", state.current());
        return state.clone();
    }
    apply_unchecked(state, action)
}

/// Apply an action already known to be legal (taken from `legal_actions`).
///
/// Still returns an unchanged copy if resolution fails, but skips the
/// legal-set check. Used by the bots, which only apply enumerated actions.
#[must_use]
pub(crate) fn apply_unchecked(state: &GameState, action: &Action) -> GameState {
    if state.is_over() {
        return state.clone();
    }

    let player = state.current();
    let name = state.current_player().name.clone();
    let mut next = state.clone();

    let message = match *action {
        Action::Move { from, direction, count } => {
            let Some((board, landing)) = resolve_move(state.board(), player, from, direction, count)
            else {
                return state.clone();
            };
            *next.board_mut() = board;
            next.add_exited(player, landing.exited as u8);

            let mut message = format!("{name} moved {count} from space {} {direction}", from + 1);
            if landing.is_exit() {
                message.push_str(&format!(", {} exited", landing.exited));
            }
            message
        }
        Action::Place => {
            let Some(space) = placement_destination(state.board()) else {
                return state.clone();
            };
            match next.board_mut().space_mut(space) {
                Some(stack) if !stack.is_full() && state.unplaced(player) > 0 => {
                    stack.push_all(&[player]);
                }
                _ => return state.clone(),
            }
            next.take_unplaced(player);
            format!("{name} placed a token on space {}", space + 1)
        }
        Action::Bubble { space, token_index } => {
            match next.board_mut().space_mut(space) {
                Some(stack)
                    if stack.tokens().get(token_index) == Some(&player)
                        && stack.is_pinned(token_index) =>
                {
                    stack.bubble(token_index);
                }
                _ => return state.clone(),
            }
            format!("{name} bubbled a token to the top of space {}", space + 1)
        }
    };

    next.set_message(message);
    next.finish_turn(ActionRecord::new(player, *action, state.turn_number()));
    if next.winner().is_some() {
        next.set_message(format!("{name} wins!"));
    }
    next
}

/// `Some` once the match is won, or when the seat to act is stuck.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<GameResult> {
    if let Some(winner) = state.winner() {
        return Some(GameResult::Winner(winner));
    }
    if legal_actions(state).is_empty() {
        return Some(GameResult::Blocked(state.current()));
    }
    None
}
