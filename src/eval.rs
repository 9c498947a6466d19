//! Positional evaluation.

use crate::board::{Board, Stone};
use crate::constants::IMPORTANCE_MAP;

/// Score `board` from `stone`'s point of view.
///
/// Each own stone adds its cell's [`IMPORTANCE_MAP`] weight and each opponent
/// stone subtracts it. Empty cells count for nothing. The result is not
/// normalized, and `evaluate(b, s) == -evaluate(b, s.opponent())`.
pub fn evaluate(board: &Board, stone: Stone) -> i32 {
    Board::coords()
        .map(|(x, y)| match board.get(x, y) {
            Some(s) if s == stone => IMPORTANCE_MAP[y][x],
            Some(_) => -IMPORTANCE_MAP[y][x],
            None => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_opening_are_balanced() {
        assert_eq!(evaluate(&Board::empty(), Stone::Black), 0);
        assert_eq!(evaluate(&Board::new(), Stone::Black), 0);
        assert_eq!(evaluate(&Board::new(), Stone::White), 0);
    }

    #[test]
    fn test_corner_and_x_square() {
        let board: Board = "X.....\n\
                            .O....\n\
                            ......\n\
                            ......\n\
                            ......\n\
                            ......"
            .parse()
            .unwrap();
        // 100 for the corner, minus -50 for white's X-square.
        assert_eq!(evaluate(&board, Stone::Black), 150);
        assert_eq!(evaluate(&board, Stone::White), -150);
    }

    #[test]
    fn test_full_board_all_black() {
        let rows = [[1u8; 6]; 6];
        let board = Board::from_rows(&rows).unwrap();
        let total: i32 = IMPORTANCE_MAP.iter().flatten().sum();
        assert_eq!(evaluate(&board, Stone::Black), total);
        assert_eq!(evaluate(&board, Stone::White), -total);
    }
}
