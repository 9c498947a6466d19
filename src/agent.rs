//! Move-choosing agents.
//!
//! The game loop that owns the authoritative board lives outside this crate.
//! It calls an [`Agent`] once per turn and applies the returned coordinate
//! itself; agents never mutate or return a board.

use std::cell::RefCell;

use crate::board::{Board, Coord, Stone};
use crate::error::Error;
use crate::rules::legal_moves;
use crate::select;

/// A strategy that picks a move for one side.
pub trait Agent {
    /// Display token for this agent. Purely cosmetic.
    fn face(&self) -> &str;

    /// Choose a move for `stone`, or `None` if it has to pass.
    fn choose_move(&self, board: &Board, stone: Stone) -> Option<Coord>;
}

/// The one-ply lookahead agent.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnigiriAgent;

impl Agent for OnigiriAgent {
    fn face(&self) -> &str {
        "🍙"
    }

    fn choose_move(&self, board: &Board, stone: Stone) -> Option<Coord> {
        select::choose_move(board, stone)
    }
}

/// Plays a uniformly random legal move.
///
/// Seeded at construction, so a given seed always produces the same choices
/// for the same sequence of calls.
pub struct RandomAgent {
    rng: RefCell<fastrand::Rng>,
}

impl RandomAgent {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Agent for RandomAgent {
    fn face(&self) -> &str {
        "🎲"
    }

    fn choose_move(&self, board: &Board, stone: Stone) -> Option<Coord> {
        let moves = legal_moves(board, stone);
        if moves.is_empty() {
            return None;
        }
        let i = self.rng.borrow_mut().usize(..moves.len());
        Some(moves[i])
    }
}

/// Choose a move on a raw grid.
///
/// `rows[row][col]` holds 0 (empty), 1 (player one) or 2 (player two) and
/// `stone` is 1 or 2. Returns `(column, row)`, or `None` if `stone` has no
/// legal move. Malformed input is rejected before any move logic runs.
pub fn place<R: AsRef<[u8]>>(rows: &[R], stone: u8) -> Result<Option<(usize, usize)>, Error> {
    let stone = Stone::try_from(stone)?;
    let board = Board::from_rows(rows)?;
    Ok(OnigiriAgent.choose_move(&board, stone))
}
