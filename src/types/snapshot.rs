use serde::{Deserialize, Serialize};

use super::tile::PlacedTile;

/// Fields per tile in the flat snapshot: x, y, w, h
pub const TILE_FIELD_COUNT: usize = 4;

/// Serializable view of one placed tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl From<&PlacedTile> for TileSnapshot {
    fn from(tile: &PlacedTile) -> Self {
        Self {
            id: tile.id.clone(),
            x: tile.position.x,
            y: tile.position.y,
            w: tile.size.w,
            h: tile.size.h,
        }
    }
}

/// Full grid state as handed to the view layer.
///
/// `revision` advances on every state-changing dispatch, so hosts can skip
/// re-renders when it has not moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub revision: u64,
    pub columns: i32,
    pub show_grid_lines: bool,
    pub tiles: Vec<TileSnapshot>,
}
