//! Turn-taking session controller
//!
//! Drives a single game between the human and the minimax computer as a
//! state machine over human-to-move, computer-to-move, and game-over. The
//! session owns its board value; every applied move produces a new board and
//! re-checks the terminal classification.

use std::time::Duration;

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{Board, Move, Outcome, Side},
    ports::{Clock, SearchObserver},
    search::minimax,
};

/// Whose move the session is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    HumanTurn,
    ComputerTurn,
    Over(Outcome),
}

/// Reply to a human move attempt.
///
/// Invalid targets are rejected without surfacing an error: the board and
/// phase stay exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReply {
    Applied,
    Rejected,
}

/// Session configuration.
///
/// Both depths are constrained to 1-9, matching the depth menus of the
/// original shell, so no invalid depth ever reaches the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Search depth for the computer's actual play (1-9)
    pub play_depth: u8,

    /// How many plies of search narration observers should show (1-9)
    pub visualize_depth: u8,

    /// Delay before the computer moves, giving the shell time to repaint
    pub computer_delay: Duration,

    /// Random seed for the opening move shortcut
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration with the original shell's defaults
    pub fn new() -> Self {
        Self {
            play_depth: 2,
            visualize_depth: 2,
            computer_delay: Duration::from_millis(100),
            seed: None,
        }
    }

    /// Set the play depth.
    pub fn with_play_depth(mut self, depth: u8) -> Self {
        self.play_depth = depth;
        self
    }

    /// Set the visualize depth.
    pub fn with_visualize_depth(mut self, depth: u8) -> Self {
        self.visualize_depth = depth;
        self
    }

    /// Set the delay before the computer's move.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    /// Set the random seed for deterministic openings.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that both depths are within 1-9.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] for the first offending value.
    pub fn validate(&self) -> Result<()> {
        for depth in [self.play_depth, self.visualize_depth] {
            if !(1..=9).contains(&depth) {
                return Err(Error::InvalidDepth { depth });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single game between the human and the computer
pub struct Session {
    board: Board,
    phase: Phase,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Start a session with `first` to move.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration holds an out-of-range depth.
    pub fn new(config: SessionConfig, first: Side) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(random()),
        };

        Ok(Session {
            board: Board::new(),
            phase: match first {
                Side::Human => Phase::HumanTurn,
                Side::Computer => Phase::ComputerTurn,
            },
            config,
            rng,
        })
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Final outcome, once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True once a terminal classification has been reached
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Attempt a human move.
    ///
    /// Occupied targets, and calls while it is not the human's turn, are
    /// silently rejected: the board stays unchanged and the phase does not
    /// advance. An applied move re-checks terminal status and hands off to
    /// the computer.
    pub fn human_move(&mut self, mv: Move) -> MoveReply {
        if self.phase != Phase::HumanTurn {
            return MoveReply::Rejected;
        }

        match self.board.place(mv, Side::Human) {
            Ok(next) => {
                self.board = next;
                self.advance(Side::Computer);
                MoveReply::Applied
            }
            Err(_) => MoveReply::Rejected,
        }
    }

    /// Play the computer's move.
    ///
    /// Waits out the configured delay through the injected clock first (the
    /// gap the original shell used to repaint the human's move). An empty
    /// board gets a uniformly random cell: the first move is symmetric, so
    /// the search is skipped on purpose. Any other position is searched to
    /// the configured play depth.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over or it is not the computer's turn.
    pub fn computer_move(
        &mut self,
        clock: &dyn Clock,
        observer: &mut dyn SearchObserver,
    ) -> Result<Move> {
        match self.phase {
            Phase::ComputerTurn => {}
            Phase::Over(_) => return Err(Error::GameOver),
            Phase::HumanTurn => return Err(Error::NotComputersTurn),
        }

        clock.pause(self.config.computer_delay);

        let mv = if self.board.occupied_count() == 0 {
            Move::new(self.rng.random_range(0..3), self.rng.random_range(0..3))?
        } else {
            let result = minimax(&self.board, self.config.play_depth, Side::Computer, observer);
            result.best.ok_or(Error::NoValidMoves)?
        };

        self.board = self.board.place(mv, Side::Computer)?;
        self.advance(Side::Human);
        Ok(mv)
    }

    fn advance(&mut self, next: Side) {
        self.phase = match self.board.outcome() {
            Some(outcome) => Phase::Over(outcome),
            None => match next {
                Side::Human => Phase::HumanTurn,
                Side::Computer => Phase::ComputerTurn,
            },
        };
    }
}
