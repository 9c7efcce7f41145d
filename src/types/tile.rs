use serde::{Deserialize, Serialize};

/// Top-left cell of a tile, 1-indexed column/row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Tile footprint in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSize {
    pub w: i32,
    pub h: i32,
}

impl TileSize {
    /// Standard tile footprints offered by the tile picker
    pub const UNIT_1X1: TileSize = TileSize { w: 1, h: 1 };
    pub const UNIT_2X1: TileSize = TileSize { w: 2, h: 1 };
    pub const UNIT_3X1: TileSize = TileSize { w: 3, h: 1 };
    pub const UNIT_1X2: TileSize = TileSize { w: 1, h: 2 };
    pub const UNIT_2X2: TileSize = TileSize { w: 2, h: 2 };

    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Cells covered by this footprint
    pub fn cell_count(&self) -> i32 {
        self.w * self.h
    }
}

/// A tile occupying a rectangle of grid cells.
///
/// Identity is the `id`; the occupied rectangle is `[x, x+w-1] x [y, y+h-1]`
/// inclusive on both axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub id: String,
    pub size: TileSize,
    pub position: GridPosition,
}

impl PlacedTile {
    pub fn new(id: impl Into<String>, position: GridPosition, size: TileSize) -> Self {
        Self {
            id: id.into(),
            size,
            position,
        }
    }

    /// Rightmost occupied column (inclusive)
    pub fn end_x(&self) -> i32 {
        self.position.x + self.size.w - 1
    }

    /// Bottommost occupied row (inclusive)
    pub fn end_y(&self) -> i32 {
        self.position.y + self.size.h - 1
    }

    /// Whether the cell at (x, y) lies inside this tile's rectangle
    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        x >= self.position.x && x <= self.end_x() && y >= self.position.y && y <= self.end_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_coordinates_are_inclusive() {
        let tile = PlacedTile::new("t1", GridPosition::new(3, 2), TileSize::UNIT_2X2);
        assert_eq!(tile.end_x(), 4);
        assert_eq!(tile.end_y(), 3);
    }

    #[test]
    fn unit_tile_ends_on_its_own_cell() {
        let tile = PlacedTile::new("t1", GridPosition::new(5, 7), TileSize::UNIT_1X1);
        assert_eq!(tile.end_x(), 5);
        assert_eq!(tile.end_y(), 7);
    }

    #[test]
    fn contains_cell_covers_the_full_rectangle() {
        let tile = PlacedTile::new("t1", GridPosition::new(2, 2), TileSize::UNIT_2X2);
        assert!(tile.contains_cell(2, 2));
        assert!(tile.contains_cell(3, 3));
        assert!(!tile.contains_cell(1, 2));
        assert!(!tile.contains_cell(4, 2));
        assert!(!tile.contains_cell(2, 4));
    }

    #[test]
    fn cell_count_matches_footprint() {
        assert_eq!(TileSize::UNIT_1X1.cell_count(), 1);
        assert_eq!(TileSize::UNIT_3X1.cell_count(), 3);
        assert_eq!(TileSize::UNIT_2X2.cell_count(), 4);
    }
}
