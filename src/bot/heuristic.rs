//! Static evaluation of a state from one seat's point of view.
//!
//! `exited_weight * exited + mobility_weight * |legal actions|
//!  + presence_weight * own tokens on board
//!  + pinned_opponent_weight * opponent tokens pinned
//!  - leader_penalty_weight * best opponent exit count`
//!
//! plus `win_bonus` when `player` has won (minus it when someone else has).
//! The bonus defaults to zero.
//!
//! Mobility counts the legal actions of whoever is to act in `state`, not
//! necessarily `player`.

use super::config::BotConfig;
use crate::core::{GameState, PlayerId};
use crate::rules::legal_actions;

/// Heuristic score of `state` for `player`. Higher is better.
#[must_use]
pub fn evaluate(state: &GameState, player: PlayerId, config: &BotConfig) -> f64 {
    let exited = f64::from(state.exited(player));
    let mobility = legal_actions(state).len() as f64;
    let presence = state.tokens_on_board(player) as f64;

    let outcome = match state.winner() {
        Some(winner) if winner == player => config.win_bonus,
        Some(_) => -config.win_bonus,
        None => 0.0,
    };

    exited * config.exited_weight
        + mobility * config.mobility_weight
        + presence * config.presence_weight
        + pressure(state, player, config)
        + outcome
}

/// Opponent pressure: reward covering opponents, punish a leading opponent.
#[must_use]
pub fn pressure(state: &GameState, player: PlayerId, config: &BotConfig) -> f64 {
    let pinned = state.board().pinned_opponent_tokens(player) as f64;
    let leader = f64::from(state.max_opponent_exited(player));

    pinned * config.pinned_opponent_weight - leader * config.leader_penalty_weight
}
