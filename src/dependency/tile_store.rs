use crate::types::{GridPosition, PlacedTile};

/// Ordered collection of placed tiles. Insertion order is preserved across
/// removals and moves; it doubles as the render order.
pub struct TileStore {
    tiles: Vec<PlacedTile>,
}

impl TileStore {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn as_slice(&self) -> &[PlacedTile] {
        &self.tiles
    }

    pub fn push(&mut self, tile: PlacedTile) {
        self.tiles.push(tile);
    }

    pub fn get(&self, tile_id: &str) -> Option<&PlacedTile> {
        self.tiles.iter().find(|tile| tile.id == tile_id)
    }

    /// Removes the tile with the given id. Returns false when no tile matched.
    pub fn remove_by_id(&mut self, tile_id: &str) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|tile| tile.id != tile_id);
        self.tiles.len() != before
    }

    /// Repositions the tile with the given id. Returns false when no tile
    /// matched.
    pub fn move_by_id(&mut self, tile_id: &str, new_position: GridPosition) -> bool {
        match self.tiles.iter_mut().find(|tile| tile.id == tile_id) {
            Some(tile) => {
                tile.position = new_position;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for TileStore {
    type Output = PlacedTile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}
