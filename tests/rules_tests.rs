//! Rules engine integration tests.
//!
//! Concrete positions exercising sliding, exits, placement priority and
//! bubbling through the public function surface.

use five_slide::core::{
    Action, Board, Direction, GameState, PlayerId, PlayerInfo, Stack, SPACE_COUNT,
};
use five_slide::rules::{
    apply_action, create_initial_state, is_legal, is_pinned, is_terminal, legal_actions,
    lowest_empty_space, placement_destination, predict_action_landing, top_run_length, GameResult,
};

const RED: PlayerId = PlayerId(0);
const BLUE: PlayerId = PlayerId(1);
const GREEN: PlayerId = PlayerId(2);

fn seats(ids: &[&str]) -> Vec<PlayerInfo> {
    ids.iter()
        .map(|id| PlayerInfo::human(*id, id.to_lowercase(), id.to_lowercase()))
        .collect()
}

fn position(ids: &[&str], stacks: &[(usize, &[PlayerId])], exited: &[u8], current: PlayerId) -> GameState {
    let mut spaces: [Stack; SPACE_COUNT] = Default::default();
    for &(space, owners) in stacks {
        spaces[space] = Stack::from_owners(owners);
    }
    GameState::from_position(seats(ids), Board::from_spaces(spaces), exited, current).unwrap()
}

// =============================================================================
// Exits and Winning
// =============================================================================

/// Two red tokens on space 8 with four already out: moving both wins.
#[test]
fn test_double_exit_wins() {
    let state = position(&["RED", "BLUE"], &[(7, &[RED, RED])], &[4, 0], RED);
    let action = Action::Move { from: 7, direction: Direction::Forward, count: 2 };
    assert!(is_legal(&state, &action));

    let next = apply_action(&state, &action);
    assert_eq!(next.exited(RED), 6);
    assert_eq!(next.winner_info().map(|p| p.id.as_str()), Some("RED"));
    assert_eq!(next.current(), RED);
    assert!(next.board().space(7).unwrap().is_empty());
}

#[test]
fn test_winner_frozen_under_further_actions() {
    let state = position(&["RED", "BLUE"], &[(7, &[RED]), (2, &[BLUE])], &[4, 0], RED);
    let won = apply_action(&state, &Action::Move { from: 7, direction: Direction::Forward, count: 1 });
    assert_eq!(won.winner(), Some(RED));

    for action in [
        Action::Place,
        Action::Move { from: 2, direction: Direction::Forward, count: 1 },
        Action::Bubble { space: 2, token_index: 0 },
    ] {
        let after = apply_action(&won, &action);
        assert_eq!(after, won);
    }
    assert_eq!(is_terminal(&won), Some(GameResult::Winner(RED)));
}

#[test]
fn test_exit_without_win_passes_turn() {
    let state = position(&["RED", "BLUE"], &[(7, &[RED])], &[0, 0], RED);
    let next = apply_action(&state, &Action::Move { from: 7, direction: Direction::Forward, count: 1 });

    assert_eq!(next.exited(RED), 1);
    assert!(next.winner().is_none());
    assert_eq!(next.current(), BLUE);
}

// =============================================================================
// Sliding
// =============================================================================

/// A single red token slides over a full blue stack.
#[test]
fn test_slide_over_full_stack() {
    let state = position(&["RED", "BLUE"], &[(2, &[RED]), (3, &[BLUE; 5])], &[0, 0], RED);
    let action = Action::Move { from: 2, direction: Direction::Forward, count: 1 };

    let landing = predict_action_landing(&state, &action).unwrap();
    assert_eq!(landing.first_space(), Some(4));

    let next = apply_action(&state, &action);
    assert_eq!(next.board().space(3).unwrap().len(), 5);
    assert_eq!(next.board().space(4).unwrap().tokens(), &[RED]);
    assert!(next.board().space(2).unwrap().is_empty());
}

#[test]
fn test_slide_over_several_full_stacks_then_exit() {
    let state = position(
        &["RED", "BLUE", "GREEN"],
        &[(5, &[RED, RED]), (6, &[BLUE; 5]), (7, &[GREEN; 5])],
        &[0, 0, 0],
        RED,
    );
    let next = apply_action(&state, &Action::Move { from: 5, direction: Direction::Forward, count: 2 });

    assert_eq!(next.exited(RED), 2);
    assert_eq!(next.board().space(6).unwrap().len(), 5);
    assert_eq!(next.board().space(7).unwrap().len(), 5);
}

#[test]
fn test_backward_blocked_by_full_stacks_is_not_offered() {
    let state = position(
        &["RED", "BLUE"],
        &[(2, &[RED]), (1, &[BLUE; 5])],
        &[0, 0],
        RED,
    );
    // Space 1 (index 0) is empty so the backward slide lands there.
    assert!(is_legal(&state, &Action::Move { from: 2, direction: Direction::Backward, count: 1 }));

    let blocked = position(
        &["RED", "BLUE", "GREEN"],
        &[(2, &[RED]), (1, &[BLUE; 5]), (0, &[GREEN; 5])],
        &[0, 0, 0],
        RED,
    );
    let backward = Action::Move { from: 2, direction: Direction::Backward, count: 1 };
    assert!(!is_legal(&blocked, &backward));
    assert_eq!(apply_action(&blocked, &backward), blocked);
}

#[test]
fn test_count_beyond_top_run_rejected() {
    let state = position(&["RED", "BLUE"], &[(3, &[RED, BLUE, RED])], &[0, 0], RED);
    assert_eq!(top_run_length(state.board(), 3, RED), 1);

    let too_many = Action::Move { from: 3, direction: Direction::Forward, count: 2 };
    assert!(!is_legal(&state, &too_many));
    assert_eq!(apply_action(&state, &too_many), state);
}

// =============================================================================
// Placement
// =============================================================================

/// Spaces 2-7 occupied, space 1 empty, nothing red on the board: only
/// `Place`, and it goes to space 1.
#[test]
fn test_place_only_into_first_space() {
    let green: &[PlayerId] = &[GREEN];
    let state = position(
        &["RED", "BLUE", "GREEN"],
        &[(1, green), (2, green), (3, green), (4, green), (5, green), (6, green)],
        &[0, 0, 0],
        RED,
    );
    assert_eq!(state.unplaced(RED), 7);
    assert_eq!(state.unplaced(BLUE), 7);
    assert_eq!(placement_destination(state.board()), Some(0));

    assert_eq!(legal_actions(&state), vec![Action::Place]);

    let next = apply_action(&state, &Action::Place);
    assert_eq!(next.board().space(0).unwrap().tokens(), &[RED]);
    assert_eq!(next.unplaced(RED), 6);
}

#[test]
fn test_place_into_last_space() {
    let green: &[PlayerId] = &[GREEN];
    let state = position(
        &["RED", "BLUE", "GREEN"],
        &[(0, green), (1, green), (2, green), (3, green), (4, green), (5, green), (6, green)],
        &[0, 0, 0],
        RED,
    );
    assert_eq!(lowest_empty_space(state.board()), Some(7));
    let next = apply_action(&state, &Action::Place);
    assert_eq!(next.board().space(7).unwrap().tokens(), &[RED]);
}

#[test]
fn test_no_place_without_reserve() {
    let state = position(&["RED", "BLUE"], &[(0, &[RED, RED, RED, RED, RED]), (1, &[RED, RED])], &[0, 0], RED);
    assert_eq!(state.unplaced(RED), 0);
    assert!(!legal_actions(&state).contains(&Action::Place));
}

// =============================================================================
// Bubbling
// =============================================================================

/// Only pinned tokens, no reserve, no empty space: bubbles only.
#[test]
fn test_bubble_when_everything_else_blocked() {
    let state = position(
        &["RED", "BLUE", "GREEN"],
        &[
            (0, &[RED, RED, BLUE]),
            (1, &[RED, BLUE]),
            (2, &[RED, GREEN]),
            (3, &[RED, BLUE, BLUE]),
            (4, &[BLUE]),
            (5, &[BLUE]),
            (6, &[GREEN]),
            (7, &[GREEN]),
        ],
        &[2, 0, 0],
        RED,
    );
    assert_eq!(state.unplaced(RED), 0);

    let actions = legal_actions(&state);
    assert_eq!(
        actions,
        vec![
            Action::Bubble { space: 0, token_index: 0 },
            Action::Bubble { space: 0, token_index: 1 },
            Action::Bubble { space: 1, token_index: 0 },
            Action::Bubble { space: 2, token_index: 0 },
            Action::Bubble { space: 3, token_index: 0 },
        ]
    );
    assert!(is_pinned(state.board(), 3, 0));

    let next = apply_action(&state, &Action::Bubble { space: 3, token_index: 0 });
    assert_eq!(next.board().space(3).unwrap().tokens(), &[BLUE, BLUE, RED]);
    for space in (0..SPACE_COUNT).filter(|&s| s != 3) {
        assert_eq!(next.board().space(space), state.board().space(space));
    }
    assert_eq!(next.current(), BLUE);
    assert_eq!(next.token_total(RED), 7);
}

#[test]
fn test_bubble_not_offered_when_move_exists() {
    let state = position(&["RED", "BLUE"], &[(0, &[RED, BLUE]), (4, &[RED])], &[0, 0], RED);
    assert!(legal_actions(&state)
        .iter()
        .all(|a| !matches!(a, Action::Bubble { .. })));
    assert!(!is_legal(&state, &Action::Bubble { space: 0, token_index: 0 }));
}

// =============================================================================
// Turn Order and Purity
// =============================================================================

#[test]
fn test_turn_order_cycles_through_all_seats() {
    let mut state = create_initial_state(seats(&["A", "B", "C", "D"])).unwrap();
    let mut order = Vec::new();
    for _ in 0..8 {
        order.push(state.current().0);
        state = apply_action(&state, &Action::Place);
    }
    assert_eq!(order, vec![0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(state.history().len(), 8);
}

#[test]
fn test_engine_is_deterministic_and_pure() {
    let state = position(&["RED", "BLUE"], &[(1, &[RED, RED]), (2, &[BLUE; 5])], &[0, 0], RED);
    let snapshot = state.clone();

    assert_eq!(legal_actions(&state), legal_actions(&state));
    for action in legal_actions(&state) {
        assert_eq!(apply_action(&state, &action), apply_action(&state, &action));
    }
    assert_eq!(state, snapshot);
}
