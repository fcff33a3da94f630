//! Game state snapshot.
//!
//! A `GameState` is an immutable value: the rules engine never edits a
//! state it was handed, it clones and returns a successor. Cloning is cheap
//! (a fixed board of small inline stacks, two small maps, and an `im`
//! persistent history), which the bot lookahead relies on.
//!
//! ## Token conservation
//!
//! For every seat `p`: `tokens on board + unplaced[p] + exited[p] == 7`.
//! Constructors enforce it and every transition preserves it. States that
//! arrive from elsewhere (deserialized snapshots) are checked with
//! [`GameState::validate`].

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::board::{Board, EXITS_TO_WIN, STACK_CAPACITY, TOKENS_PER_PLAYER};
use super::player::{PlayerId, PlayerInfo, PlayerMap};
use crate::error::SetupError;

/// Fewest seats a match can have.
pub const MIN_PLAYERS: usize = 1;

/// Most seats a match can have.
pub const MAX_PLAYERS: usize = 8;

/// Complete snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    unplaced: PlayerMap<u8>,
    exited: PlayerMap<u8>,
    players: Vec<PlayerInfo>,
    current: PlayerId,
    winner: Option<PlayerId>,
    message: Option<String>,
    /// Starts at 1, incremented on every applied action.
    turn_number: u32,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh match: empty board, seven reserve tokens per seat, seat 0 to act.
    pub fn new(players: Vec<PlayerInfo>) -> Result<Self, SetupError> {
        validate_players(&players)?;
        let count = players.len();

        Ok(Self {
            board: Board::new(),
            unplaced: PlayerMap::with_value(count, TOKENS_PER_PLAYER),
            exited: PlayerMap::with_value(count, 0),
            players,
            current: PlayerId(0),
            winner: None,
            message: None,
            turn_number: 1,
            history: Vector::new(),
        })
    }

    /// Build a mid-game position.
    ///
    /// Reserve counts are derived from the board and `exited` so that token
    /// conservation holds; a seat with more than seven tokens accounted for
    /// is rejected. If some seat already has five exits it becomes the winner.
    pub fn from_position(
        players: Vec<PlayerInfo>,
        board: Board,
        exited: &[u8],
        current: PlayerId,
    ) -> Result<Self, SetupError> {
        validate_players(&players)?;
        let count = players.len();

        if exited.len() != count {
            return Err(SetupError::SeatCountMismatch {
                expected: count,
                actual: exited.len(),
            });
        }
        if current.index() >= count {
            return Err(SetupError::InvalidSeat(current.0));
        }
        for stack in board.spaces() {
            if let Some(&owner) = stack.tokens().iter().find(|p| p.index() >= count) {
                return Err(SetupError::InvalidSeat(owner.0));
            }
        }

        let exited = PlayerMap::new(count, |p| exited[p.index()]);
        let mut unplaced = PlayerMap::with_value(count, 0);
        for (seat, &gone) in exited.iter() {
            let used = board.tokens_of(seat) + gone as usize;
            if used > TOKENS_PER_PLAYER as usize {
                return Err(SetupError::TooManyTokens {
                    player: players[seat.index()].id.clone(),
                    count: used,
                });
            }
            unplaced[seat] = TOKENS_PER_PLAYER - used as u8;
        }

        let winner = exited
            .iter()
            .find(|(_, &gone)| gone >= EXITS_TO_WIN)
            .map(|(seat, _)| seat);

        let state = Self {
            board,
            unplaced,
            exited,
            players,
            current,
            winner,
            message: None,
            turn_number: 1,
            history: Vector::new(),
        };
        state.validate()?;
        Ok(state)
    }

    /// Check every structural invariant of a snapshot.
    ///
    /// Seats are unique and 1-8 in number, per-seat maps match the seat
    /// count, `current` and every token owner name a real seat, no stack
    /// holds more than five tokens, each seat accounts for exactly seven
    /// tokens, and `winner` is set exactly when some seat has five exits.
    pub fn validate(&self) -> Result<(), SetupError> {
        validate_players(&self.players)?;
        let count = self.players.len();

        for actual in [self.unplaced.player_count(), self.exited.player_count()] {
            if actual != count {
                return Err(SetupError::SeatCountMismatch {
                    expected: count,
                    actual,
                });
            }
        }
        if self.current.index() >= count {
            return Err(SetupError::InvalidSeat(self.current.0));
        }

        for (space, stack) in self.board.spaces().iter().enumerate() {
            if stack.len() > STACK_CAPACITY {
                return Err(SetupError::StackOverflow {
                    space: space + 1,
                    len: stack.len(),
                });
            }
            if let Some(&owner) = stack.tokens().iter().find(|p| p.index() >= count) {
                return Err(SetupError::InvalidSeat(owner.0));
            }
        }

        for seat in PlayerId::all(count) {
            let total = self.token_total(seat);
            if total != TOKENS_PER_PLAYER as usize {
                return Err(SetupError::TokenCount {
                    player: self.players[seat.index()].id.clone(),
                    count: total,
                });
            }
        }

        let finished = self.exited.iter().any(|(_, &gone)| gone >= EXITS_TO_WIN);
        match self.winner {
            Some(seat) if seat.index() >= count => Err(SetupError::InvalidSeat(seat.0)),
            Some(seat) if self.exited[seat] < EXITS_TO_WIN => Err(SetupError::WinnerMismatch),
            None if finished => Err(SetupError::WinnerMismatch),
            _ => Ok(()),
        }
    }

    // === Read-only queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Description of a seat.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&PlayerInfo> {
        self.players.get(seat.index())
    }

    /// Seat of the player with the given string id.
    #[must_use]
    pub fn seat_of(&self, id: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .map(|i| PlayerId(i as u8))
    }

    /// Seat whose turn it is (frozen once a winner exists).
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &PlayerInfo {
        &self.players[self.current.index()]
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn winner_info(&self) -> Option<&PlayerInfo> {
        self.winner.and_then(|seat| self.player(seat))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Reserve tokens not yet placed.
    #[must_use]
    pub fn unplaced(&self, seat: PlayerId) -> u8 {
        self.unplaced[seat]
    }

    /// Tokens that have left the board.
    #[must_use]
    pub fn exited(&self, seat: PlayerId) -> u8 {
        self.exited[seat]
    }

    /// Highest exit count among seats other than `seat`.
    #[must_use]
    pub fn max_opponent_exited(&self, seat: PlayerId) -> u8 {
        self.exited
            .iter()
            .filter(|(p, _)| *p != seat)
            .map(|(_, &gone)| gone)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn tokens_on_board(&self, seat: PlayerId) -> usize {
        self.board.tokens_of(seat)
    }

    /// Board + reserve + exited. Always seven.
    #[must_use]
    pub fn token_total(&self, seat: PlayerId) -> usize {
        self.tokens_on_board(seat) + self.unplaced[seat] as usize + self.exited[seat] as usize
    }

    /// Description of the last applied action.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Transition helpers (rules engine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn take_unplaced(&mut self, seat: PlayerId) {
        self.unplaced[seat] = self.unplaced[seat].saturating_sub(1);
    }

    pub(crate) fn add_exited(&mut self, seat: PlayerId, count: u8) {
        self.exited[seat] = self.exited[seat].saturating_add(count);
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Record the action, then either crown `seat` or pass the turn on.
    pub(crate) fn finish_turn(&mut self, record: ActionRecord) {
        let seat = record.player;
        self.history.push_back(record);
        self.turn_number += 1;

        if self.exited[seat] >= EXITS_TO_WIN {
            self.winner = Some(seat);
        } else {
            self.current = self.current.next(self.players.len());
        }
    }
}

fn validate_players(players: &[PlayerInfo]) -> Result<(), SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(SetupError::PlayerCount(players.len()));
    }

    let mut seen = FxHashSet::default();
    for player in players {
        if !seen.insert(player.id.as_str()) {
            return Err(SetupError::DuplicatePlayer(player.id.clone()));
        }
    }
    Ok(())
}
