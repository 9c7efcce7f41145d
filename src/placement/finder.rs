use super::collision::check_collision;
use crate::types::{GridPosition, PlacedTile, TileSize};

/// Whether a tile of `size` at `position` lies entirely inside
/// `[1, columns] x [1, max_rows]`.
pub fn fits_within(position: GridPosition, size: TileSize, columns: i32, max_rows: i32) -> bool {
    position.x >= 1
        && position.y >= 1
        && position.x + size.w - 1 <= columns
        && position.y + size.h - 1 <= max_rows
}

/// Whether a tile of `size` could legally sit at `position`: inside the grid
/// bounds and clear of every placed tile. Useful for hover/preview states.
pub fn can_place_at(
    position: GridPosition,
    size: TileSize,
    placed_tiles: &[PlacedTile],
    columns: i32,
    max_rows: i32,
) -> bool {
    fits_within(position, size, columns, max_rows) && !check_collision(position, size, placed_tiles)
}

/// Finds the first open slot for a tile of `size`, scanning row-major: rows
/// top to bottom, columns left to right, both 1-indexed.
///
/// The loop bounds keep every candidate rectangle inside
/// `[1, columns] x [1, max_rows]`, so a returned position always fits; when
/// the tile is wider than the grid or taller than the row budget the ranges
/// are empty and the search reports `None` immediately. The lowest-y, then
/// lowest-x tie-break is part of the contract.
pub fn find_available_spot(
    size: TileSize,
    placed_tiles: &[PlacedTile],
    columns: i32,
    max_rows: i32,
) -> Option<GridPosition> {
    for y in 1..=max_rows - size.h + 1 {
        for x in 1..=columns - size.w + 1 {
            let position = GridPosition::new(x, y);
            if !check_collision(position, size, placed_tiles) {
                return Some(position);
            }
        }
    }
    None
}
