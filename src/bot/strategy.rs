//! Difficulty-tiered action selection.
//!
//! - **Easy**: random, biased toward exiting moves.
//! - **Medium**: one-ply greedy on the heuristic plus landing and pinning
//!   bonuses.
//! - **Hard**: one ply of own move, the next seat's best reply as a
//!   penalty, and optionally the acting seat's best follow-up.
//!
//! Medium and hard are deterministic: ties go to the action enumerated
//! first.

use log::debug;

use super::config::{BotConfig, ReplyModel};
use super::heuristic::evaluate;
use crate::core::{Action, Difficulty, GameRng, GameState, PlayerId};
use crate::rules::{apply_unchecked, legal_actions, predict_action_landing};

/// An action with the score a strategy assigned to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredAction {
    pub action: Action,
    pub score: f64,
}

/// Pick an action for the seat to act, or `None` if it has no legal action.
pub fn choose_bot_action(
    state: &GameState,
    difficulty: Difficulty,
    config: &BotConfig,
    rng: &mut GameRng,
) -> Option<Action> {
    let choice = match difficulty {
        Difficulty::Easy => choose_easy(state, config, rng),
        Difficulty::Medium => best_of(score_medium(state, config)),
        Difficulty::Hard => best_of(score_hard(state, config)),
    };

    debug!(
        "{} bot for {} chose {:?}",
        difficulty,
        state.current(),
        choice
    );
    choice
}

/// Easy tier: with `easy_exit_probability`, pick uniformly among exiting
/// moves (if any); otherwise uniformly among all legal actions.
pub fn choose_easy(state: &GameState, config: &BotConfig, rng: &mut GameRng) -> Option<Action> {
    let actions = legal_actions(state);
    let exits: Vec<Action> = actions
        .iter()
        .copied()
        .filter(|action| predict_action_landing(state, action).is_some_and(|l| l.is_exit()))
        .collect();

    if !exits.is_empty() && rng.gen_bool(config.easy_exit_probability) {
        return rng.choose(&exits).copied();
    }
    rng.choose(&actions).copied()
}

/// Medium tier scores for every legal action, in enumeration order.
#[must_use]
pub fn score_medium(state: &GameState, config: &BotConfig) -> Vec<ScoredAction> {
    let me = state.current();

    legal_actions(state)
        .into_iter()
        .map(|action| {
            let next = apply_unchecked(state, &action);
            let score = evaluate(&next, me, config)
                + landing_bonus(state, &action, config)
                + newly_pinned(state, &next, me) as f64 * config.newly_pinned_bonus;
            ScoredAction { action, score }
        })
        .collect()
}

/// Hard tier scores for every legal action, in enumeration order.
#[must_use]
pub fn score_hard(state: &GameState, config: &BotConfig) -> Vec<ScoredAction> {
    let me = state.current();

    legal_actions(state)
        .into_iter()
        .map(|action| {
            let next = apply_unchecked(state, &action);
            let replies = legal_actions(&next);
            let opponent = next.current();

            let mut self_score = evaluate(&next, me, config);
            // A lone seat moves again immediately; there is no opponent reply.
            let reply_score = if opponent == me {
                0.0
            } else {
                max_score(score_for(&next, &replies, opponent, config).iter().map(|s| s.score))
                    .unwrap_or(0.0)
            };

            if config.follow_up {
                if let Some(follow) = follow_up_score(&next, &replies, me, config) {
                    self_score += config.follow_up_weight * follow;
                }
            }

            ScoredAction {
                action,
                score: self_score - config.reply_penalty * reply_score,
            }
        })
        .collect()
}

/// Highest score wins; the first of equal scores is kept.
#[must_use]
pub fn best_of(scored: Vec<ScoredAction>) -> Option<Action> {
    let mut best: Option<ScoredAction> = None;
    for candidate in scored {
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best.map(|b| b.action)
}

fn score_for(
    state: &GameState,
    actions: &[Action],
    player: PlayerId,
    config: &BotConfig,
) -> Vec<ScoredAction> {
    actions
        .iter()
        .map(|&action| ScoredAction {
            action,
            score: evaluate(&apply_unchecked(state, &action), player, config),
        })
        .collect()
}

fn max_score(scores: impl Iterator<Item = f64>) -> Option<f64> {
    scores.fold(None, |best: Option<f64>, score| Some(best.map_or(score, |b| b.max(score))))
}

/// Best evaluation `me` can reach after the modeled reply, if `me` is on
/// move again at that point.
fn follow_up_score(
    state: &GameState,
    replies: &[Action],
    me: PlayerId,
    config: &BotConfig,
) -> Option<f64> {
    let reply = match config.follow_up_reply {
        ReplyModel::FirstEnumerated => replies.first().copied(),
        ReplyModel::Best => best_of(score_for(state, replies, state.current(), config)),
    }?;

    let after = apply_unchecked(state, &reply);
    if after.is_over() || after.current() != me {
        return None;
    }

    max_score(
        legal_actions(&after)
            .iter()
            .map(|action| evaluate(&apply_unchecked(&after, action), me, config)),
    )
}

fn landing_bonus(state: &GameState, action: &Action, config: &BotConfig) -> f64 {
    match action {
        Action::Move { .. } => match predict_action_landing(state, action) {
            Some(landing) if landing.is_exit() => config.exit_landing_bonus,
            Some(_) => config.space_landing_bonus,
            None => 0.0,
        },
        Action::Place => config.space_landing_bonus,
        Action::Bubble { .. } => 0.0,
    }
}

/// Spaces whose top changed from an opponent's token to one of `me`'s.
fn newly_pinned(before: &GameState, after: &GameState, me: PlayerId) -> usize {
    before
        .board()
        .spaces()
        .iter()
        .zip(after.board().spaces())
        .filter(|(old, new)| {
            old.top().is_some_and(|owner| owner != me) && new.top() == Some(me)
        })
        .count()
}
