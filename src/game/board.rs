//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineScan;

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Computer => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'H' | 'h' => Some(Cell::Human),
            'C' | 'c' => Some(Cell::Computer),
            _ => None,
        }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Convert side to the cell it places
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Computer => Cell::Computer,
        }
    }
}

/// A (row, col) move target in [0,2] x [0,2]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a move, rejecting coordinates outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if either
    /// coordinate exceeds 2.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row > 2 || col > 2 {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        Ok(Move { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terminal classification of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HumanWin,
    ComputerWin,
    Draw,
}

/// An owned 3x3 board value.
///
/// Implements `Copy` (9 bytes of cells); placing a piece returns a new board
/// rather than mutating shared state, so search and gameplay never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Create a board from a 9-character string (row-major, whitespace ignored).
    ///
    /// Cells are `H` (human), `C` (computer), or `.` (empty).
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters are present or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(9).enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(board)
    }

    /// Get the cell at a move target
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Check if a move target is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Get all empty cells in row-major order.
    ///
    /// Together with the occupied cells this partitions the 9 positions;
    /// search candidate enumeration and tie-breaking rely on the ordering.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut cells = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    cells.push(Move { row, col });
                }
            }
        }
        cells
    }

    /// Count the occupied cells
    pub fn occupied_count(&self) -> usize {
        9 - self.empty_cells().len()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// Place a piece and return the new board value.
    ///
    /// # Errors
    ///
    /// Returns error if the target cell is already occupied.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, mv: Move, side: Side) -> Result<Board, crate::Error> {
        if !self.is_empty(mv) {
            return Err(crate::Error::OccupiedCell {
                row: mv.row(),
                col: mv.col(),
            });
        }

        let mut next = *self;
        next.cells[mv.row()][mv.col()] = side.to_cell();
        Ok(next)
    }

    /// Check whether a side holds any of the 8 winning triples
    pub fn wins(&self, side: Side) -> bool {
        LineScan::has_won(&self.cells, side)
    }

    /// True iff either side has won
    pub fn game_over(&self) -> bool {
        self.wins(Side::Human) || self.wins(Side::Computer)
    }

    /// Static score: +1 computer win, -1 human win, 0 draw or in-progress
    pub fn evaluate(&self) -> i32 {
        if self.wins(Side::Computer) {
            1
        } else if self.wins(Side::Human) {
            -1
        } else {
            0
        }
    }

    /// Classify the board, or `None` while the game is still in progress
    pub fn outcome(&self) -> Option<Outcome> {
        if self.wins(Side::Computer) {
            Some(Outcome::ComputerWin)
        } else if self.wins(Side::Human) {
            Some(Outcome::HumanWin)
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Row-major string encoding, e.g. `HC.......`
    pub fn encode(&self) -> String {
        let mut s = String::with_capacity(9);
        for row in &self.cells {
            for cell in row {
                s.push(cell.to_char());
            }
        }
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
