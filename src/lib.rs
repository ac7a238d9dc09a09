//! Tic-tac-toe against a depth-bounded minimax opponent
//!
//! This crate provides:
//! - Complete 3x3 game rules with move validation
//! - A full-width minimax search with narration hooks
//! - A turn-taking session controller with injected timing
//! - A CLI shell for interactive play, position analysis, and selfplay

pub mod cli;
pub mod error;
pub mod game;
pub mod ports;
pub mod search;
pub mod session;

pub use error::{Error, Result};
pub use game::{Board, Cell, Move, Outcome, Side};
pub use ports::{Clock, NarrationLog, NoDelay, NullObserver, SearchObserver, SystemClock};
pub use search::{Scored, minimax};
pub use session::{MoveReply, Phase, Session, SessionConfig};
