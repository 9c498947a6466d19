//! 6x6 board representation.
//!
//! A [`Board`] is a small `Copy` value: every simulated move produces a fresh
//! board and the caller's board is never touched. Cells are `Option<Stone>`,
//! so no cell can hold anything but empty, black or white.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, N, RAW_BLACK, RAW_EMPTY, RAW_WHITE};
use crate::error::Error;

/// A player's stone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    /// Player one, raw id 1. Moves first.
    Black,
    /// Player two, raw id 2.
    White,
}

impl Stone {
    /// The other player. Applying it twice gives back `self`.
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Raw id used by the `{0, 1, 2}` grid encoding.
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Stone::Black => RAW_BLACK,
            Stone::White => RAW_WHITE,
        }
    }

    /// Character used by the text format and `Display`.
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl TryFrom<u8> for Stone {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            RAW_BLACK => Ok(Stone::Black),
            RAW_WHITE => Ok(Stone::White),
            other => Err(Error::InvalidStone(other)),
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell coordinate as `(column, row)`, zero-indexed.
pub type Coord = (usize, usize);

/// Step one cell from `from` along `dir`, or `None` if that leaves the board.
#[inline]
pub fn step(from: Coord, dir: (isize, isize)) -> Option<Coord> {
    let x = from.0.checked_add_signed(dir.0)?;
    let y = from.1.checked_add_signed(dir.1)?;
    (x < N && y < N).then_some((x, y))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Stone>; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The opening position: black on (2,2) and (3,3), white on (3,2) and (2,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(2, 2, Some(Stone::Black));
        board.set(3, 2, Some(Stone::White));
        board.set(2, 3, Some(Stone::White));
        board.set(3, 3, Some(Stone::Black));
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Build a board from raw rows, `rows[row][col]` in `{0, 1, 2}`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        if rows.len() != N {
            return Err(Error::BoardHeight(rows.len()));
        }
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != N {
                return Err(Error::BoardWidth {
                    row: y,
                    len: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = match value {
                    RAW_EMPTY => None,
                    id => Some(Stone::try_from(id).map_err(|_| Error::InvalidCell {
                        row: y,
                        col: x,
                        value: id,
                    })?),
                };
                board.set(x, y, cell);
            }
        }
        Ok(board)
    }

    /// Raw rows in the `{0, 1, 2}` encoding, `[row][col]`.
    pub fn to_rows(&self) -> [[u8; N]; N] {
        let mut rows = [[RAW_EMPTY; N]; N];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.get(x, y).map_or(RAW_EMPTY, Stone::id);
            }
        }
        rows
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * N + x
    }

    /// Stone at `(x, y)`. Off-board coordinates read as empty.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Stone> {
        if x >= N || y >= N {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is off the board.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Option<Stone>) {
        assert!(x < N && y < N, "({x}, {y}) is off the board");
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    /// Number of stones of the given color.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(stone)).count()
    }

    /// Number of empty cells.
    pub fn empties(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Every coordinate in row-major order (rows outer, columns inner).
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..N).flat_map(|y| (0..N).map(move |x| (x, y)))
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse six lines of six cells. `.`/`0` is empty, `X`/`1` black,
    /// `O`/`2` white; whitespace inside a line and blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != N {
            return Err(Error::BoardHeight(lines.len()));
        }
        let mut board = Self::empty();
        for (y, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != N {
                return Err(Error::BoardWidth {
                    row: y,
                    len: chars.len(),
                });
            }
            for (x, &ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' | '0' => None,
                    'X' | 'x' | '1' => Some(Stone::Black),
                    'O' | 'o' | '2' => Some(Stone::White),
                    _ => return Err(Error::InvalidCellChar { row: y, col: x, ch }),
                };
                board.set(x, y, cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let ch = self.get(x, y).map_or('.', Stone::symbol);
                if x + 1 < N {
                    write!(f, "{ch} ")?;
                } else {
                    write!(f, "{ch}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
