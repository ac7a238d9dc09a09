//! Ports (trait boundaries) for timing and search narration.
//!
//! The interaction shell injects implementations of these traits so the
//! engine never hard-codes sleeping or rendering concerns.

pub mod clock;
pub mod observer;

pub use clock::{Clock, NoDelay, SystemClock};
pub use observer::{NarrationLog, NullObserver, SearchObserver};
