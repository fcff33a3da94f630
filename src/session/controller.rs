//! Single-match controller.
//!
//! A `Session` owns the only live `GameState` of one match. Every inbound
//! action, human or bot, goes through the same gate: the match must be
//! running, the actor must be the seat to act, and the action must be in
//! the legal set. Only then is the state replaced by its successor.
//!
//! Bot turns are two-step so callers can delay them: `pending_bot_turn`
//! hands out a `BotTicket` bound to the current version, and
//! `play_bot_turn` refuses the ticket if anything was applied (or the
//! match was reset) in between.

use log::{debug, info, warn};

use crate::bot::{BotConfig, BotPlayer};
use crate::core::{Action, GameRng, GameState, PlayerId, PlayerInfo};
use crate::error::{ActionError, SetupError};
use crate::rules::{apply_action, is_legal, legal_actions};

/// Permission to play one bot turn against a specific state version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotTicket {
    version: u64,
    seat: PlayerId,
}

impl BotTicket {
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }
}

/// Owner of one match's authoritative state.
#[derive(Clone, Debug)]
pub struct Session {
    initial: GameState,
    state: GameState,
    version: u64,
    seed_rng: GameRng,
    bot: BotPlayer,
}

impl Session {
    /// Start a match with default bot tuning.
    pub fn new(players: Vec<PlayerInfo>, seed: u64) -> Result<Self, SetupError> {
        Self::with_config(players, seed, BotConfig::default())
    }

    pub fn with_config(
        players: Vec<PlayerInfo>,
        seed: u64,
        config: BotConfig,
    ) -> Result<Self, SetupError> {
        let initial = GameState::new(players)?;
        Self::from_state(initial, seed, config)
    }

    /// Resume from an existing state (e.g. a decoded snapshot).
    ///
    /// The state is validated first; a broken one never becomes live.
    pub fn from_state(
        state: GameState,
        seed: u64,
        config: BotConfig,
    ) -> Result<Self, SetupError> {
        state.validate()?;
        let initial = GameState::new(state.players().to_vec())?;
        let mut seed_rng = GameRng::new(seed);
        let bot = BotPlayer::with_rng(config, seed_rng.fork());

        Ok(Self {
            initial,
            state,
            version: 0,
            seed_rng,
            bot,
        })
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Bumped on every applied action and on reset.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Validate and apply an action on behalf of `player_id`.
    pub fn submit(&mut self, player_id: &str, action: Action) -> Result<&GameState, ActionError> {
        if self.state.is_over() {
            warn!("rejected {action} from {player_id}: game over");
            return Err(ActionError::GameOver);
        }

        let seat = self
            .state
            .seat_of(player_id)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.to_string()))?;
        if seat != self.state.current() {
            warn!("rejected {action} from {player_id}: not their turn");
            return Err(ActionError::NotYourTurn {
                expected: self.state.current_player().id.clone(),
                actual: player_id.to_string(),
            });
        }
        if !is_legal(&self.state, &action) {
            warn!("rejected illegal {action} from {player_id}");
            return Err(ActionError::IllegalAction(action));
        }

        self.state = apply_action(&self.state, &action);
        self.version += 1;
        debug!("{player_id} played {action} (version {})", self.version);

        if let Some(winner) = self.state.winner_info() {
            info!("{} wins after {} turns", winner.id, self.state.history().len());
        }
        Ok(&self.state)
    }

    /// A ticket for the next bot turn, if a bot is to act in a running match.
    #[must_use]
    pub fn pending_bot_turn(&self) -> Option<BotTicket> {
        if self.state.is_over() || !self.state.current_player().is_bot() {
            return None;
        }
        Some(BotTicket {
            version: self.version,
            seat: self.state.current(),
        })
    }

    /// Let the bot named by `ticket` choose and submit its action.
    pub fn play_bot_turn(&mut self, ticket: BotTicket) -> Result<Action, ActionError> {
        if ticket.version != self.version || ticket.seat != self.state.current() {
            warn!(
                "discarding stale bot ticket (version {}, now {})",
                ticket.version, self.version
            );
            return Err(ActionError::StaleTicket {
                issued: ticket.version,
                current: self.version,
            });
        }

        let player = self.state.current_player().clone();
        if !player.is_bot() {
            return Err(ActionError::NotABot(ticket.seat));
        }

        let difficulty = player.difficulty.unwrap_or_default();
        let action = self
            .bot
            .choose(&self.state, difficulty)
            .ok_or(ActionError::NoLegalAction)?;
        self.submit(&player.id, action)?;
        Ok(action)
    }

    /// Play bot turns back to back until a human is to act, the match ends,
    /// the bot to act is stuck, or `limit` turns were played. Returns the
    /// number of turns played.
    pub fn run_bots(&mut self, limit: usize) -> Result<usize, ActionError> {
        let mut played = 0;
        while played < limit {
            let Some(ticket) = self.pending_bot_turn() else {
                break;
            };
            match self.play_bot_turn(ticket) {
                Ok(_) => played += 1,
                Err(ActionError::NoLegalAction) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(played)
    }

    /// Legal actions for `player_id`, empty when it is not their turn.
    #[must_use]
    pub fn legal_actions_for(&self, player_id: &str) -> Vec<Action> {
        match self.state.seat_of(player_id) {
            Some(seat) if seat == self.state.current() => legal_actions(&self.state),
            _ => Vec::new(),
        }
    }

    /// Start the match over with the same seats.
    ///
    /// Outstanding bot tickets become stale and the bot RNG moves on to a
    /// fresh stream.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.version += 1;
        let config = self.bot.config().clone();
        self.bot = BotPlayer::with_rng(config, self.seed_rng.fork());
        debug!("session reset (version {})", self.version);
    }
}
