//! The board: eight ordered spaces, each holding a stack of up to five tokens.
//!
//! Stacks are ordered bottom-to-top (index 0 = bottom). A token carries only
//! the seat of its owner; it has no identity beyond its stack position.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Number of spaces on the board ("space 1" through "space 8").
pub const SPACE_COUNT: usize = 8;

/// Maximum tokens a single space can hold.
pub const STACK_CAPACITY: usize = 5;

/// Tokens each player owns for the whole match.
pub const TOKENS_PER_PLAYER: u8 = 7;

/// Exited tokens required to win.
pub const EXITS_TO_WIN: u8 = 5;

/// Tokens carried together by a single move.
pub type Block = SmallVec<[PlayerId; STACK_CAPACITY]>;

/// Tokens at one space, bottom-to-top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    tokens: SmallVec<[PlayerId; STACK_CAPACITY]>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from owners listed bottom-to-top.
    ///
    /// Panics if more than [`STACK_CAPACITY`] tokens are given; see
    /// [`Stack::try_from_owners`] for untrusted input.
    #[must_use]
    pub fn from_owners(owners: &[PlayerId]) -> Self {
        assert!(owners.len() <= STACK_CAPACITY, "A stack holds at most 5 tokens");
        Self {
            tokens: SmallVec::from_slice(owners),
        }
    }

    /// Like [`Stack::from_owners`], but `None` for more than
    /// [`STACK_CAPACITY`] tokens.
    #[must_use]
    pub fn try_from_owners(owners: &[PlayerId]) -> Option<Self> {
        (owners.len() <= STACK_CAPACITY).then(|| Self {
            tokens: SmallVec::from_slice(owners),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tokens.len() >= STACK_CAPACITY
    }

    /// Tokens that can still be added before the stack is full.
    #[must_use]
    pub fn free_capacity(&self) -> usize {
        STACK_CAPACITY.saturating_sub(self.tokens.len())
    }

    /// Owners bottom-to-top.
    #[must_use]
    pub fn tokens(&self) -> &[PlayerId] {
        &self.tokens
    }

    /// Owner of the top token.
    #[must_use]
    pub fn top(&self) -> Option<PlayerId> {
        self.tokens.last().copied()
    }

    /// Length of the contiguous run of `player`'s tokens at the top.
    ///
    /// ```
    /// use five_slide::core::{PlayerId, Stack};
    ///
    /// let (red, blue) = (PlayerId(0), PlayerId(1));
    /// let stack = Stack::from_owners(&[red, blue, red, red]);
    /// assert_eq!(stack.top_run_length(red), 2);
    /// assert_eq!(stack.top_run_length(blue), 0);
    /// ```
    #[must_use]
    pub fn top_run_length(&self, player: PlayerId) -> usize {
        self.tokens.iter().rev().take_while(|&&owner| owner == player).count()
    }

    /// Whether the token at `index` has at least one token above it.
    #[must_use]
    pub fn is_pinned(&self, index: usize) -> bool {
        index + 1 < self.tokens.len()
    }

    /// Number of tokens owned by `player` anywhere in this stack.
    #[must_use]
    pub fn count_of(&self, player: PlayerId) -> usize {
        self.tokens.iter().filter(|&&owner| owner == player).count()
    }

    /// Pinned tokens in this stack that are NOT owned by `player`.
    #[must_use]
    pub fn pinned_not_owned_by(&self, player: PlayerId) -> usize {
        let pinned = self.tokens.len().saturating_sub(1);
        self.tokens[..pinned].iter().filter(|&&owner| owner != player).count()
    }

    /// Remove the top `count` tokens, returned bottom-to-top.
    pub(crate) fn take_top(&mut self, count: usize) -> Block {
        let split = self.tokens.len().saturating_sub(count);
        self.tokens.drain(split..).collect()
    }

    /// Append tokens on top. Caller guarantees capacity.
    pub(crate) fn push_all(&mut self, tokens: &[PlayerId]) {
        debug_assert!(self.tokens.len() + tokens.len() <= STACK_CAPACITY);
        self.tokens.extend_from_slice(tokens);
    }

    /// Move the token at `index` to the top, keeping the order of the rest.
    pub(crate) fn bubble(&mut self, index: usize) {
        if index < self.tokens.len() {
            let token = self.tokens.remove(index);
            self.tokens.push(token);
        }
    }
}

/// The eight spaces of the board, indexed 0..8.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    spaces: [Stack; SPACE_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit stacks.
    #[must_use]
    pub fn from_spaces(spaces: [Stack; SPACE_COUNT]) -> Self {
        Self { spaces }
    }

    /// Stack at `space`, or `None` if the index is off the board.
    #[must_use]
    pub fn space(&self, space: usize) -> Option<&Stack> {
        self.spaces.get(space)
    }

    pub(crate) fn space_mut(&mut self, space: usize) -> Option<&mut Stack> {
        self.spaces.get_mut(space)
    }

    /// All stacks in board order.
    #[must_use]
    pub fn spaces(&self) -> &[Stack] {
        &self.spaces
    }

    /// Lowest-indexed empty space.
    #[must_use]
    pub fn lowest_empty_space(&self) -> Option<usize> {
        self.spaces.iter().position(Stack::is_empty)
    }

    /// Tokens owned by `player` across all spaces.
    #[must_use]
    pub fn tokens_of(&self, player: PlayerId) -> usize {
        self.spaces.iter().map(|stack| stack.count_of(player)).sum()
    }

    /// Pinned tokens owned by anyone other than `player`.
    #[must_use]
    pub fn pinned_opponent_tokens(&self, player: PlayerId) -> usize {
        self.spaces.iter().map(|stack| stack.pinned_not_owned_by(player)).sum()
    }

    /// Whether the token at (`space`, `index`) exists and is pinned.
    #[must_use]
    pub fn is_pinned(&self, space: usize, index: usize) -> bool {
        self.space(space)
            .is_some_and(|stack| index < stack.len() && stack.is_pinned(index))
    }

    /// Top-of-stack contiguous run length for `player` at `space`.
    #[must_use]
    pub fn top_run_length(&self, space: usize, player: PlayerId) -> usize {
        self.space(space).map_or(0, |stack| stack.top_run_length(player))
    }
}
