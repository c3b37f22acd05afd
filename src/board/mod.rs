//! Board: the line of placed tiles and its two open ends.
//!
//! Backed by `im::Vector` so snapshots handed to display code and kept in
//! state history clone in O(1).

mod chain;

pub use chain::{Board, Orientation, PlacedTile, Placement, Side};
