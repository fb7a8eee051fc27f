//! Board model: sides, cells and moves on the 3x3 grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cells per row and per column
pub const BOARD_SIZE: usize = 3;

/// Total number of cells
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Integer encoding of a human-occupied cell
pub const HUMAN_SENTINEL: i8 = 0;

/// Integer encoding of a machine-occupied cell
pub const MACHINE_SENTINEL: i8 = -1;

// ============================================================================
// SIDES AND CELLS
// ============================================================================

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Machine,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }

    /// Integer marker stored in an occupied cell
    pub const fn sentinel(self) -> i8 {
        match self {
            Side::Human => HUMAN_SENTINEL,
            Side::Machine => MACHINE_SENTINEL,
        }
    }

    /// Character used in the compact text form
    pub const fn glyph(self) -> char {
        match self {
            Side::Human => 'X',
            Side::Machine => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => f.write_str("human"),
            Side::Machine => f.write_str("machine"),
        }
    }
}

/// Contents of a single cell.
///
/// An empty cell remembers its 1-9 position number so it can be shown to the
/// player as the square to type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty(u8),
    Taken(Side),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty(_))
    }

    pub const fn sentinel(self) -> i8 {
        match self {
            Cell::Empty(square) => square as i8,
            Cell::Taken(side) => side.sentinel(),
        }
    }
}

impl TryFrom<i8> for Cell {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            HUMAN_SENTINEL => Ok(Cell::Taken(Side::Human)),
            MACHINE_SENTINEL => Ok(Cell::Taken(Side::Machine)),
            1..=9 => Ok(Cell::Empty(value as u8)),
            _ => Err(Error::InvalidSentinel(value)),
        }
    }
}

// ============================================================================
// MOVES
// ============================================================================

/// A (row, column) coordinate, both in 0..=2
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a human-facing square number (1-9, row-major) to a move
    pub fn from_square(square: u8) -> Result<Self> {
        if !(1..=NUM_CELLS as u8).contains(&square) {
            return Err(Error::InvalidSquare(square.to_string()));
        }
        let index = (square - 1) as usize;
        Ok(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Square number (1-9) of this move
    pub const fn square(self) -> u8 {
        (self.index() + 1) as u8
    }

    /// Both coordinates inside the 3x3 grid
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index (0-8)
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Every coordinate in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..NUM_CELLS).map(|i| Move::new(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight winning lines: rows, columns, then both diagonals
pub const LINES: [[Move; 3]; 8] = [
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

// ============================================================================
// BOARD
// ============================================================================

/// Sentinel grid as exchanged with callers: 1-9 empty, 0 human, -1 machine
pub type SentinelGrid = [[i8; BOARD_SIZE]; BOARD_SIZE];

/// The 3x3 grid.
///
/// `Board` is `Copy` (9 cells of 2 bytes each); the search places markers on
/// copies and never touches the caller's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "SentinelGrid", try_from = "SentinelGrid")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting board: every cell empty, numbered 1-9
    pub const fn new() -> Self {
        Self {
            cells: [
                [Cell::Empty(1), Cell::Empty(2), Cell::Empty(3)],
                [Cell::Empty(4), Cell::Empty(5), Cell::Empty(6)],
                [Cell::Empty(7), Cell::Empty(8), Cell::Empty(9)],
            ],
        }
    }

    /// Build from the integer encoding.
    ///
    /// An empty cell must carry its own position number.
    pub fn from_sentinels(grid: SentinelGrid) -> Result<Self> {
        let mut board = Self::new();
        for mv in Move::all() {
            let cell = Cell::try_from(grid[mv.row][mv.col])?;
            if let Cell::Empty(square) = cell {
                if square != mv.square() {
                    return Err(Error::InvalidBoard(format!(
                        "cell {} holds position {} instead of {}",
                        mv,
                        square,
                        mv.square()
                    )));
                }
            }
            board.cells[mv.row][mv.col] = cell;
        }
        Ok(board)
    }

    pub fn to_sentinels(&self) -> SentinelGrid {
        self.cells.map(|row| row.map(Cell::sentinel))
    }

    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.cell(mv).is_empty()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|&mv| self.is_empty_at(mv))
    }

    pub fn has_empty_cell(&self) -> bool {
        self.empty_cells().next().is_some()
    }

    /// Number of cells occupied by `side`
    pub fn count(&self, side: Side) -> usize {
        Move::all()
            .filter(|&mv| self.cell(mv) == Cell::Taken(side))
            .count()
    }

    /// Place a marker, rejecting off-board and occupied cells
    pub fn place(&mut self, mv: Move, side: Side) -> Result<()> {
        if !mv.is_on_board() {
            return Err(Error::InvalidSquare(mv.to_string()));
        }
        if !self.is_empty_at(mv) {
            return Err(Error::SquareTaken(mv.square()));
        }
        self.cells[mv.row][mv.col] = Cell::Taken(side);
        Ok(())
    }

    /// Copy of this board with `side` placed at `mv` (unchecked)
    pub fn with(mut self, mv: Move, side: Side) -> Self {
        debug_assert!(self.is_empty_at(mv), "placing on occupied cell {mv}");
        self.cells[mv.row][mv.col] = Cell::Taken(side);
        self
    }
}

impl From<Board> for SentinelGrid {
    fn from(board: Board) -> Self {
        board.to_sentinels()
    }
}

impl TryFrom<SentinelGrid> for Board {
    type Error = Error;

    fn try_from(grid: SentinelGrid) -> Result<Self> {
        Board::from_sentinels(grid)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters, ignoring whitespace and `/`.
    ///
    /// `X` is human, `O` is machine, and `.`, `-`, `_` or a digit is empty.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != NUM_CELLS {
            return Err(Error::InvalidBoard(format!(
                "expected {} cells, found {}",
                NUM_CELLS,
                chars.len()
            )));
        }

        let mut board = Board::new();
        for (mv, c) in Move::all().zip(chars) {
            board.cells[mv.row][mv.col] = match c {
                'X' | 'x' => Cell::Taken(Side::Human),
                'O' | 'o' => Cell::Taken(Side::Machine),
                '.' | '-' | '_' | '1'..='9' => Cell::Empty(mv.square()),
                other => {
                    return Err(Error::InvalidBoard(format!(
                        "unexpected character '{other}'"
                    )))
                }
            };
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Compact form, e.g. `X2O/456/78X`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                match cell {
                    Cell::Empty(square) => write!(f, "{square}")?,
                    Cell::Taken(side) => write!(f, "{}", side.glyph())?,
                }
            }
        }
        Ok(())
    }
}
