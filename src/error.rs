//! Errors for malformed boards and player ids.
//!
//! Running out of legal moves is not an error; it is reported as `None` or
//! an empty move list.

/// Input rejected before it reaches the move logic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("board must have 6 rows, got {0}")]
    BoardHeight(usize),

    #[error("row {row} must have 6 cells, got {len}")]
    BoardWidth { row: usize, len: usize },

    #[error("invalid cell value {value} at column {col}, row {row} (expected 0, 1 or 2)")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("invalid cell character '{ch}' at column {col}, row {row}")]
    InvalidCellChar { row: usize, col: usize, ch: char },

    #[error("invalid stone id {0} (expected 1 or 2)")]
    InvalidStone(u8),
}
