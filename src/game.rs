//! Tic-tac-toe game rules: board state, moves, and winning-line analysis

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Move, Outcome, Side};
pub use lines::{LineScan, WINNING_LINES};
