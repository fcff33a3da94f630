//! Move resolution with sliding.
//!
//! A moved block steps one space in its direction. Full spaces are skipped;
//! a space with room takes as many tokens as fit (bottom of the block first)
//! and the rest keep sliding the same way. Stepping forward past space 8
//! exits everything still carried. Stepping backward past space 1 rejects
//! the whole move, even if part of the block had already found room.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Block, Board, Direction, PlayerId, SPACE_COUNT};

/// Where a resolved move puts its tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    /// `(space, tokens added)` in the order the block reached them.
    pub spaces: SmallVec<[(usize, usize); 2]>,
    /// Tokens carried off the board.
    pub exited: usize,
}

impl Landing {
    /// Whether any carried token leaves the board.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        self.exited > 0
    }

    /// First space that received tokens.
    #[must_use]
    pub fn first_space(&self) -> Option<usize> {
        self.spaces.first().map(|&(space, _)| space)
    }

    /// Last space that received tokens; its top is now the mover's.
    #[must_use]
    pub fn last_space(&self) -> Option<usize> {
        self.spaces.last().map(|&(space, _)| space)
    }
}

/// Resolve a move on a copy of `board`.
///
/// Returns the new board and the landing, or `None` when the move is
/// illegal: bad source, `count` outside `1..=top run`, or a backward slide
/// off the board.
#[must_use]
pub fn resolve_move(
    board: &Board,
    player: PlayerId,
    from: usize,
    direction: Direction,
    count: usize,
) -> Option<(Board, Landing)> {
    if count == 0 || count > board.top_run_length(from, player) {
        return None;
    }

    let mut next = board.clone();
    let block = next.space_mut(from)?.take_top(count);
    let landing = slide(&mut next, block, from, direction)?;
    Some((next, landing))
}

/// Landing a hypothetical move would produce, without building a state.
#[must_use]
pub fn predict_landing(
    board: &Board,
    player: PlayerId,
    from: usize,
    direction: Direction,
    count: usize,
) -> Option<Landing> {
    resolve_move(board, player, from, direction, count).map(|(_, landing)| landing)
}

fn slide(board: &mut Board, mut block: Block, from: usize, direction: Direction) -> Option<Landing> {
    let mut landing = Landing::default();
    let mut position = from as isize + direction.step();

    while !block.is_empty() {
        if position < 0 {
            trace!("move from space {} slid off the back of the board", from + 1);
            return None;
        }
        if position as usize >= SPACE_COUNT {
            // Only forward slides get here.
            landing.exited += block.len();
            break;
        }

        let space = position as usize;
        let stack = board.space_mut(space)?;
        let room = stack.free_capacity();
        if room > 0 {
            let take = room.min(block.len());
            let rest: Block = block.drain(take..).collect();
            stack.push_all(&block);
            landing.spaces.push((space, take));
            block = rest;
        }
        position += direction.step();
    }

    Some(landing)
}
