//! Board geometry, cell encodings, and evaluation parameters.
//!
//! Everything here is fixed at compile time. The board is a 6x6 grid stored
//! row-major, and coordinates are `(column, row)` pairs.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 6;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

// =============================================================================
// Raw Cell Encoding
// =============================================================================

/// Empty cell in the raw `{0, 1, 2}` grid encoding.
pub const RAW_EMPTY: u8 = 0;

/// Player one (black, moves first).
pub const RAW_BLACK: u8 = 1;

/// Player two (white).
pub const RAW_WHITE: u8 = 2;

// =============================================================================
// Capture Rays
// =============================================================================

/// Unit steps `(dx, dy)` for the eight capture rays.
///
/// Rays are always walked in this order.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, -1),  // N
    (0, 1),   // S
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
];

// =============================================================================
// Evaluation
// =============================================================================

/// Positional weight of every cell, indexed `[row][col]`.
///
/// Corners are worth the most; the cells diagonally next to a corner hand the
/// corner to the opponent and are the worst.
pub const IMPORTANCE_MAP: [[i32; N]; N] = [
    [100, -20, 10, 10, -20, 100],
    [-20, -50, -5, -5, -50, -20],
    [10, -5, 1, 1, -5, 10],
    [10, -5, 1, 1, -5, 10],
    [-20, -50, -5, -5, -50, -20],
    [100, -20, 10, 10, -20, 100],
];

/// Weight of the opponent's best immediate reply in a candidate's net score.
pub const REPLY_WEIGHT: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_map_symmetry() {
        for y in 0..N {
            for x in 0..N {
                let w = IMPORTANCE_MAP[y][x];
                assert_eq!(w, IMPORTANCE_MAP[x][y], "transpose at ({x},{y})");
                assert_eq!(w, IMPORTANCE_MAP[y][N - 1 - x], "mirror at ({x},{y})");
                assert_eq!(w, IMPORTANCE_MAP[N - 1 - y][x], "flip at ({x},{y})");
            }
        }
    }

    #[test]
    fn test_directions_are_distinct_units() {
        for (i, &(dx, dy)) in DIRECTIONS.iter().enumerate() {
            assert!((dx, dy) != (0, 0));
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!(!DIRECTIONS[i + 1..].contains(&(dx, dy)));
        }
    }
}
