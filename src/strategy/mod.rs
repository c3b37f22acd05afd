//! Move selection.
//!
//! Strategies are trait-based so that scripted, random, heuristic or
//! human-driven players plug into the engine without touching it:
//! - `FirstLegal`: lowest legal tile index (the default)
//! - `RandomLegal`: uniform over legal tiles, seeded
//! - `HeaviestTile`: highest pip count first

pub mod policy;

pub use policy::{FirstLegal, HeaviestTile, RandomLegal, SelectionStrategy, StrategyKind};
