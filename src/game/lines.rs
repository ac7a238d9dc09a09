//! Winning line analysis for the 3x3 board

use super::board::{Cell, Side};

/// The 8 winning triples as (row, col) coordinates
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// Utility for scanning winning lines
pub struct LineScan;

impl LineScan {
    /// Check if a side holds three in a row
    pub fn has_won(cells: &[[Cell; 3]; 3], side: Side) -> bool {
        let target = side.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
    }

    /// Find the completed winning line for a side, if any
    pub fn winning_line(cells: &[[Cell; 3]; 3], side: Side) -> Option<[(usize, usize); 3]> {
        let target = side.to_cell();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
            .copied()
    }
}
