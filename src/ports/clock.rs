//! Clock port - injected timing abstraction
//!
//! The original interaction shell stalled the event loop directly
//! (`window.after` before the computer's move, `time.sleep` between narrated
//! search candidates). Timing goes through this port instead, so shells pick
//! a real clock and tests pick a no-op one.

use std::{thread, time::Duration};

/// Source of deliberate pauses
pub trait Clock: Send {
    /// Block for the given duration
    fn pause(&self, duration: Duration);
}

/// Wall-clock implementation backed by `thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// No-op clock for tests and non-interactive runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Clock for NoDelay {
    fn pause(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_no_delay_returns_immediately() {
        let clock = NoDelay;
        let start = Instant::now();
        clock.pause(Duration::from_secs(60));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_system_clock_skips_zero_pause() {
        let clock = SystemClock;
        let start = Instant::now();
        clock.pause(Duration::ZERO);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
