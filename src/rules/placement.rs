//! Placement destination.
//!
//! A reserve token always goes to one computed space: space 1 when spaces
//! 2-7 are occupied and space 1 is free, else space 8 when spaces 1-7 are
//! occupied and space 8 is free, else the lowest empty space.

use crate::core::{Board, GameState, SPACE_COUNT, STACK_CAPACITY};

/// Space a reserve token would be placed on, or `None` on a board with no
/// empty space.
#[must_use]
pub fn placement_destination(board: &Board) -> Option<usize> {
    let spaces = board.spaces();
    let occupied = |range: std::ops::Range<usize>| spaces[range].iter().all(|s| !s.is_empty());
    let last = SPACE_COUNT - 1;

    if spaces[0].is_empty() && occupied(1..last) {
        return Some(0);
    }
    if spaces[last].is_empty() && occupied(0..last) {
        return Some(last);
    }
    board.lowest_empty_space()
}

/// Whether the player to act may place a reserve token.
#[must_use]
pub fn can_place(state: &GameState) -> bool {
    if state.unplaced(state.current()) == 0 {
        return false;
    }
    placement_destination(state.board())
        .and_then(|space| state.board().space(space))
        .is_some_and(|stack| stack.len() < STACK_CAPACITY)
}
