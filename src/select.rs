//! One-ply lookahead move selection.
//!
//! Every legal candidate is scored as its own resulting evaluation minus
//! [`REPLY_WEIGHT`] times the opponent's best immediate reply. The reply is
//! only looked at one move deep; there is no recursion and no pruning.

use log::debug;

use crate::board::{Board, Coord, Stone};
use crate::constants::REPLY_WEIGHT;
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves};

/// How a single candidate was scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveScore {
    /// Evaluation of the board right after the candidate, for the mover.
    pub own: i32,
    /// Best evaluation the opponent can reach with one reply, for the
    /// opponent. `None` if the opponent has no legal reply.
    pub reply: Option<i32>,
    /// `own - REPLY_WEIGHT * reply`, with a missing reply costing nothing.
    pub net: f64,
}

/// Opponent's best reply evaluation on `board`, or `None` if it must pass.
fn best_reply(board: &Board, opponent: Stone) -> Option<i32> {
    legal_moves(board, opponent)
        .into_iter()
        .map(|r| evaluate(&apply_move(board, opponent, r), opponent))
        .max()
}

/// Score `stone` playing at `coord`. `coord` should be a legal move.
pub fn score_move(board: &Board, stone: Stone, coord: Coord) -> MoveScore {
    let after = apply_move(board, stone, coord);
    let own = evaluate(&after, stone);
    let reply = best_reply(&after, stone.opponent());
    let penalty = reply.map_or(0.0, |r| REPLY_WEIGHT * f64::from(r));
    MoveScore {
        own,
        reply,
        net: f64::from(own) - penalty,
    }
}

/// Pick the move for `stone` with the greatest net score.
///
/// Ties go to the candidate found first in row-major order. Returns `None`
/// when `stone` has no legal move, which the caller treats as a pass.
pub fn choose_move(board: &Board, stone: Stone) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;
    for coord in legal_moves(board, stone) {
        let score = score_move(board, stone, coord);
        debug!(
            "{:?} at {:?}: own={} reply={:?} net={}",
            stone, coord, score.own, score.reply, score.net
        );
        if best.is_none_or(|(_, top)| score.net > top) {
            best = Some((coord, score.net));
        }
    }
    best.map(|(coord, _)| coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_breakdown() {
        let score = score_move(&Board::new(), Stone::Black, (3, 1));
        assert_eq!(score.own, -3);
        assert_eq!(score.reply, Some(0));
        assert_eq!(score.net, -3.0);
    }

    #[test]
    fn test_opening_choice_is_first_of_symmetric_moves() {
        // All four opening moves are equivalent under the board's symmetry.
        assert_eq!(choose_move(&Board::new(), Stone::Black), Some((3, 1)));
        assert_eq!(choose_move(&Board::new(), Stone::White), Some((2, 1)));
    }

    #[test]
    fn test_no_reply_costs_nothing() {
        let board: Board = "XO....\n\
                            ......\n\
                            ......\n\
                            ......\n\
                            ......\n\
                            ......"
            .parse()
            .unwrap();
        let score = score_move(&board, Stone::Black, (2, 0));
        assert_eq!(score.reply, None);
        assert_eq!(score.own, 100 - 20 + 10);
        assert_eq!(score.net, 90.0);
        assert!(score.net.is_finite());
    }

    #[test]
    fn test_single_move_is_chosen() {
        let board: Board = "XO....\n\
                            ......\n\
                            ......\n\
                            ......\n\
                            ......\n\
                            ......"
            .parse()
            .unwrap();
        assert_eq!(choose_move(&board, Stone::Black), Some((2, 0)));
        assert_eq!(choose_move(&board, Stone::White), None);
    }

    #[test]
    fn test_prefers_corner_over_earlier_move() {
        // Black can play (2,0) or take the corner at (5,5).
        let board: Board = "......\n\
                            ..O...\n\
                            ..X...\n\
                            ......\n\
                            ......\n\
                            ...XO."
            .parse()
            .unwrap();
        assert_eq!(legal_moves(&board, Stone::Black), vec![(2, 0), (5, 5)]);

        let edge = score_move(&board, Stone::Black, (2, 0));
        assert_eq!((edge.own, edge.reply, edge.net), (36, Some(-6), 39.0));

        let corner = score_move(&board, Stone::Black, (5, 5));
        assert_eq!((corner.own, corner.reply, corner.net), (96, Some(-93), 142.5));

        assert_eq!(choose_move(&board, Stone::Black), Some((5, 5)));
    }
}
