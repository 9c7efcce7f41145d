use crate::types::{GridPosition, PlacedTile, TileSize};

/// Checks whether a tile of `size` placed at `position` would overlap any of
/// the already placed tiles.
///
/// Rectangles are 1-indexed and inclusive on both ends, so tiles sharing a
/// boundary cell collide while tiles in adjacent cells do not. Linear in the
/// number of placed tiles; inputs are not validated.
pub fn check_collision(position: GridPosition, size: TileSize, placed_tiles: &[PlacedTile]) -> bool {
    let new_end_x = position.x + size.w - 1;
    let new_end_y = position.y + size.h - 1;

    for tile in placed_tiles {
        let x_overlap = position.x <= tile.end_x() && new_end_x >= tile.position.x;
        let y_overlap = position.y <= tile.end_y() && new_end_y >= tile.position.y;
        if x_overlap && y_overlap {
            return true;
        }
    }
    false
}
