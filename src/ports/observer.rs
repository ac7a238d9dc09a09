//! Search observer port - narration hooks for the minimax search
//!
//! Observers let shells watch the search without coupling it to any output
//! format. The "Show AI moves" feature of the original shell becomes the
//! [`NarrationLog`] implementation here.

use std::time::Duration;

use crate::{game::Move, ports::clock::Clock};

/// Hooks invoked by the minimax search as it considers candidate moves.
///
/// `ply` is the 0-based distance from the search root. Both hooks default to
/// no-ops so observers only implement what they need.
pub trait SearchObserver {
    /// Called before a candidate move is searched
    fn on_probe(&mut self, _ply: usize, _mv: Move) {}

    /// Called after a candidate move has been scored
    fn on_candidate(&mut self, _ply: usize, _mv: Move, _score: i32) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Collects human-readable narration lines for shallow plies of the search.
///
/// Only candidates within the configured visualize depth are narrated,
/// matching the depth selector of the original shell. Optional pacing pauses
/// through an injected [`Clock`] before each narrated probe so an attached
/// display has time to show the scratch move.
pub struct NarrationLog {
    visualize_depth: usize,
    entries: Vec<String>,
    pacing: Option<(Box<dyn Clock>, Duration)>,
}

impl NarrationLog {
    /// Create a log narrating candidates within `visualize_depth` plies
    pub fn new(visualize_depth: u8) -> Self {
        Self {
            visualize_depth: visualize_depth as usize,
            entries: Vec::new(),
            pacing: None,
        }
    }

    /// Pause through `clock` for `step` before each narrated probe
    pub fn with_pacing(mut self, clock: Box<dyn Clock>, step: Duration) -> Self {
        self.pacing = Some((clock, step));
        self
    }

    /// Narrated lines collected so far
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Drop all collected lines (the shell clears the log each computer turn)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn narrated(&self, ply: usize) -> bool {
        ply < self.visualize_depth
    }
}

impl SearchObserver for NarrationLog {
    fn on_probe(&mut self, ply: usize, _mv: Move) {
        if self.narrated(ply)
            && let Some((clock, step)) = &self.pacing
        {
            clock.pause(*step);
        }
    }

    fn on_candidate(&mut self, ply: usize, mv: Move, score: i32) {
        if self.narrated(ply) {
            self.entries.push(format!(
                "Checking move at ({}, {}) with score {} at depth {}",
                mv.row(),
                mv.col(),
                score,
                ply + 1
            ));
        }
    }
}
