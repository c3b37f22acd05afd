//! Tile image asset names.
//!
//! The extracted tile images are named `tiles/tile_{low}_{high}.jpg`. Only
//! display code looks these up; the rules never do.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, MAX_PIP};

/// Identifier of a tile's display asset (a relative image path).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset for the tile showing `a` and `b`, in either order.
#[must_use]
pub fn tile_asset(a: u8, b: u8) -> AssetId {
    AssetId(format!("tiles/tile_{}_{}.jpg", a.min(b), a.max(b)))
}

impl Tile {
    #[must_use]
    pub fn asset(&self) -> AssetId {
        tile_asset(self.low(), self.high())
    }
}

/// All 28 assets, in tile generation order.
#[must_use]
pub fn all_tile_assets() -> Vec<AssetId> {
    (0..=MAX_PIP)
        .flat_map(|low| (low..=MAX_PIP).map(move |high| tile_asset(low, high)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_asset_normalizes_order() {
        assert_eq!(tile_asset(2, 5).as_str(), "tiles/tile_2_5.jpg");
        assert_eq!(tile_asset(5, 2), tile_asset(2, 5));
        assert_eq!(Tile::new(6, 6).asset().to_string(), "tiles/tile_6_6.jpg");
    }

    #[test]
    fn test_all_tile_assets_are_distinct() {
        let assets = all_tile_assets();
        assert_eq!(assets.len(), 28);

        let mut sorted = assets.clone();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted.dedup();
        assert_eq!(sorted.len(), 28);
    }
}
