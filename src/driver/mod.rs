//! Game driver and the observer interface for display code.
//!
//! The driver owns the engine for the length of one game and calls
//! observers strictly between turns.

mod game;
mod observer;

pub use game::{EndReason, GameDriver, GameReport};
pub use observer::{EventLog, GameEvent, GameObserver, NullObserver};
