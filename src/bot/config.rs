//! Bot tuning parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which opponent reply the hard bot assumes when scoring its follow-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyModel {
    /// The first reply in enumeration order.
    #[default]
    FirstEnumerated,
    /// The reply that maximizes the opponent's own evaluation.
    Best,
}

/// Weights and probabilities used by every difficulty tier.
///
/// Missing keys in a TOML source fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Chance the easy bot restricts itself to exiting moves when any exist.
    pub easy_exit_probability: f64,

    // Heuristic evaluation.
    pub exited_weight: f64,
    /// Per legal action available in the evaluated state.
    pub mobility_weight: f64,
    /// Per own token on the board.
    pub presence_weight: f64,
    /// Per opponent token currently pinned.
    pub pinned_opponent_weight: f64,
    /// Per exit of the best-placed opponent (subtracted).
    pub leader_penalty_weight: f64,
    /// Added for a state `player` has won, subtracted for one an opponent
    /// has won. Off (zero) by default, which leaves the plain weighted sum.
    pub win_bonus: f64,

    // Medium bot bonuses.
    pub exit_landing_bonus: f64,
    pub space_landing_bonus: f64,
    /// Per opponent token newly covered by the action.
    pub newly_pinned_bonus: f64,

    // Hard bot lookahead.
    /// Multiplier on the next player's best reply score (subtracted).
    pub reply_penalty: f64,
    /// Multiplier on the acting player's best follow-up score.
    pub follow_up_weight: f64,
    /// Whether to look one more ply ahead at all.
    pub follow_up: bool,
    pub follow_up_reply: ReplyModel,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            easy_exit_probability: 0.7,
            exited_weight: 6.0,
            mobility_weight: 1.0,
            presence_weight: 0.5,
            pinned_opponent_weight: 1.5,
            leader_penalty_weight: 4.0,
            win_bonus: 0.0,
            exit_landing_bonus: 3.0,
            space_landing_bonus: 1.0,
            newly_pinned_bonus: 2.0,
            reply_penalty: 0.6,
            follow_up_weight: 0.2,
            follow_up: true,
            follow_up_reply: ReplyModel::FirstEnumerated,
        }
    }
}

impl BotConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check probabilities and weights are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.easy_exit_probability) {
            return Err(ConfigError::Validation(
                "easy_exit_probability must be in [0, 1]".into(),
            ));
        }

        let weights = [
            ("exited_weight", self.exited_weight),
            ("mobility_weight", self.mobility_weight),
            ("presence_weight", self.presence_weight),
            ("pinned_opponent_weight", self.pinned_opponent_weight),
            ("leader_penalty_weight", self.leader_penalty_weight),
            ("win_bonus", self.win_bonus),
            ("exit_landing_bonus", self.exit_landing_bonus),
            ("space_landing_bonus", self.space_landing_bonus),
            ("newly_pinned_bonus", self.newly_pinned_bonus),
            ("reply_penalty", self.reply_penalty),
            ("follow_up_weight", self.follow_up_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    pub fn with_easy_exit_probability(mut self, probability: f64) -> Self {
        self.easy_exit_probability = probability;
        self
    }

    pub fn with_win_bonus(mut self, bonus: f64) -> Self {
        self.win_bonus = bonus;
        self
    }

    pub fn with_reply_penalty(mut self, penalty: f64) -> Self {
        self.reply_penalty = penalty;
        self
    }

    pub fn with_follow_up(mut self, enabled: bool) -> Self {
        self.follow_up = enabled;
        self
    }

    pub fn with_follow_up_reply(mut self, model: ReplyModel) -> Self {
        self.follow_up_reply = model;
        self
    }
}
