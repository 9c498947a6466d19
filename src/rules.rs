//! Reversi capture rules: legality, move enumeration and move simulation.
//!
//! A placement is legal when at least one capture ray starting next to it
//! runs over one or more opponent stones and ends on the mover's own stone.
//! Rays are walked in [`DIRECTIONS`] order.
//!
//! The eight rays from one origin never share a cell, so the flips found along
//! one direction cannot change what a later direction sees. [`apply_move`]
//! therefore collects every flip against the input board and applies them in
//! one pass.

use log::trace;

use crate::board::{step, Board, Coord, Stone};
use crate::constants::{DIRECTIONS, N};

/// Opponent stones captured along a single ray from `from`.
///
/// Returns an empty list when the ray runs off the board, hits an empty
/// cell, or meets the mover's own stone immediately.
fn ray_captures(board: &Board, stone: Stone, from: Coord, dir: (isize, isize)) -> Vec<Coord> {
    let opponent = stone.opponent();
    let mut run = Vec::new();
    let mut cur = step(from, dir);
    while let Some((x, y)) = cur {
        match board.get(x, y) {
            Some(s) if s == opponent => run.push((x, y)),
            Some(_) => return run,
            None => break,
        }
        cur = step((x, y), dir);
    }
    Vec::new()
}

/// Whether `stone` may be placed at `coord`.
///
/// Occupied and off-board coordinates are never legal.
pub fn is_legal(board: &Board, stone: Stone, coord: Coord) -> bool {
    let (x, y) = coord;
    if x >= N || y >= N || board.get(x, y).is_some() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| !ray_captures(board, stone, coord, dir).is_empty())
}

/// Whether `stone` has any legal placement. Stops at the first one found.
pub fn has_legal_move(board: &Board, stone: Stone) -> bool {
    Board::coords().any(|c| is_legal(board, stone, c))
}

/// All legal placements for `stone` in row-major order.
///
/// An empty list means the player has to pass.
pub fn legal_moves(board: &Board, stone: Stone) -> Vec<Coord> {
    let moves: Vec<Coord> = Board::coords()
        .filter(|&c| is_legal(board, stone, c))
        .collect();
    trace!("{} legal moves for {:?}", moves.len(), stone);
    moves
}

/// Stones captured by placing `stone` at `coord`, grouped by ray in
/// [`DIRECTIONS`] order.
pub fn flips(board: &Board, stone: Stone, coord: Coord) -> Vec<Coord> {
    DIRECTIONS
        .iter()
        .flat_map(|&dir| ray_captures(board, stone, coord, dir))
        .collect()
}

/// Board after `stone` is placed at `coord` and all captures are flipped.
///
/// The input board is left untouched. `coord` should be legal: an illegal
/// coordinate places the stone without flipping anything.
///
/// # Panics
///
/// Panics if `coord` is off the board.
pub fn apply_move(board: &Board, stone: Stone, coord: Coord) -> Board {
    let captured = flips(board, stone, coord);
    let mut next = *board;
    next.set(coord.0, coord.1, Some(stone));
    for (x, y) in captured {
        next.set(x, y, Some(stone));
    }
    next
}
