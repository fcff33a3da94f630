//! Computer opponents.
//!
//! ## Overview
//!
//! Bots are stateless functions of `(state, difficulty)`, built only on the
//! public rules functions. The single piece of carried state is the RNG the
//! easy tier draws from, which `BotPlayer` bundles with a `BotConfig`.
//!
//! ## Usage
//!
//! ```rust
//! use five_slide::bot::{BotConfig, BotPlayer};
//! use five_slide::core::{Difficulty, GameState, PlayerInfo};
//! use five_slide::rules::apply_action;
//!
//! let state = GameState::new(vec![
//!     PlayerInfo::bot("RED", "Red", "red", Difficulty::Hard),
//!     PlayerInfo::human("BLUE", "Blue", "blue"),
//! ])
//! .unwrap();
//!
//! let mut bot = BotPlayer::new(BotConfig::default(), 42);
//! let action = bot.choose(&state, Difficulty::Hard).unwrap();
//! let next = apply_action(&state, &action);
//! assert_eq!(next.unplaced(state.current()), 6);
//! ```

pub mod config;
pub mod heuristic;
pub mod strategy;

pub use config::{BotConfig, ReplyModel};
pub use heuristic::{evaluate, pressure};
pub use strategy::{best_of, choose_bot_action, choose_easy, score_hard, score_medium, ScoredAction};

use crate::core::{Action, Difficulty, GameRng, GameState};

/// A configured bot with its own deterministic RNG.
#[derive(Clone, Debug)]
pub struct BotPlayer {
    config: BotConfig,
    rng: GameRng,
}

impl BotPlayer {
    #[must_use]
    pub fn new(config: BotConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn with_rng(config: BotConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Choose an action for the seat to act in `state`.
    pub fn choose(&mut self, state: &GameState, difficulty: Difficulty) -> Option<Action> {
        choose_bot_action(state, difficulty, &self.config, &mut self.rng)
    }
}
