//! Tiles: the double-six set, ownership, dealing, and display assets.

pub mod assets;
pub mod deal;
pub mod tile;

pub use assets::{all_tile_assets, tile_asset, AssetId};
pub use deal::{assign_tiles, generate_tiles};
pub use tile::{Tile, TileId, TileOwner, MAX_PIP, TILE_COUNT};
