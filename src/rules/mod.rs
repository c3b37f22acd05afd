//! Domino rules: legality, placement, the turn engine, and the consistency
//! checks it runs after every turn.
//!
//! `TurnEngine` is the only component that mutates `GameState`. Strategies
//! and drivers decide what to do; the engine decides whether it is allowed.

pub mod engine;
pub mod invariants;
pub mod placement;

pub use engine::{LegalTiles, TurnEngine, TurnOutcome};
pub use placement::{can_play, placement_for};
