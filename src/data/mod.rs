mod tile_id;

pub use tile_id::TileIdGenerator;

use crate::constants::{DEBUG_GRID_ROWS, DEFAULT_GRID_COLUMNS, DEFAULT_MAX_ROWS};
use crate::dependency::TileStore;
use crate::types::{GridPosition, GridSnapshot, PlacedTile, TileSnapshot, TILE_FIELD_COUNT};

/// The grid store's backing state: the placed-tile list, grid configuration,
/// and the snapshot buffers handed to the view layer.
///
/// Every state-changing mutation advances `revision` and marks both snapshot
/// buffers dirty; mutations that change nothing leave all three untouched.
pub struct GridData {
    revision: u64,
    columns: i32,
    show_grid_lines: bool,
    max_rows: i32,
    tiles: TileStore,
    ids: TileIdGenerator,
    flat_snapshot: Vec<f32>,
    snapshot_dirty: bool,
    flat_snapshot_dirty: bool,
}

impl GridData {
    pub fn new() -> Self {
        Self::with_columns(DEFAULT_GRID_COLUMNS)
    }

    pub fn with_columns(columns: i32) -> Self {
        Self {
            revision: 0,
            columns,
            show_grid_lines: false,
            max_rows: DEFAULT_MAX_ROWS,
            tiles: TileStore::new(),
            ids: TileIdGenerator::new(),
            flat_snapshot: Vec::new(),
            snapshot_dirty: true,
            flat_snapshot_dirty: true,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn max_rows(&self) -> i32 {
        self.max_rows
    }

    /// Search depth for spot finding; not part of the reducer state, so
    /// changing it does not advance the revision.
    pub fn set_max_rows(&mut self, max_rows: i32) {
        self.max_rows = max_rows;
    }

    pub fn tiles(&self) -> &[PlacedTile] {
        self.tiles.as_slice()
    }

    pub fn tile(&self, tile_id: &str) -> Option<&PlacedTile> {
        self.tiles.get(tile_id)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The topmost-inserted tile covering the cell at (x, y), if any. With the
    /// non-overlap invariant intact there is at most one.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&PlacedTile> {
        self.tiles
            .as_slice()
            .iter()
            .find(|tile| tile.contains_cell(x, y))
    }

    /// Total cells covered by placed tiles
    pub fn occupied_cell_count(&self) -> i32 {
        self.tiles
            .as_slice()
            .iter()
            .map(|tile| tile.size.cell_count())
            .sum()
    }

    /// Cells the view layer enumerates for the debug overlay, row-major over
    /// the configured debug row band
    pub fn debug_cell_count(&self) -> i32 {
        self.columns * DEBUG_GRID_ROWS
    }

    pub fn next_tile_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Appends a tile as-is. No collision check; callers pre-validate.
    pub fn push_tile(&mut self, tile: PlacedTile) {
        self.tiles.push(tile);
        self.touch();
    }

    /// Removes a tile by id. Returns whether the state changed.
    pub fn remove_tile(&mut self, tile_id: &str) -> bool {
        let removed = self.tiles.remove_by_id(tile_id);
        if removed {
            self.touch();
        }
        removed
    }

    /// Repositions a tile by id, as-is. Returns whether the state changed.
    pub fn move_tile(&mut self, tile_id: &str, new_position: GridPosition) -> bool {
        let moved = self.tiles.move_by_id(tile_id, new_position);
        if moved {
            self.touch();
        }
        moved
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid_lines = !self.show_grid_lines;
        self.touch();
    }

    /// Sets the column count. Setting the current value is a deliberate no-op:
    /// no revision bump, no snapshot invalidation, so redundant breakpoint
    /// notifications cost nothing downstream.
    pub fn set_columns(&mut self, columns: i32) -> bool {
        if columns == self.columns {
            return false;
        }
        self.columns = columns;
        self.touch();
        true
    }

    pub fn snapshot_dirty(&self) -> bool {
        self.snapshot_dirty
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn flat_snapshot_dirty(&self) -> bool {
        self.flat_snapshot_dirty
    }

    pub fn build_snapshot(&mut self) -> GridSnapshot {
        self.snapshot_dirty = false;
        GridSnapshot {
            revision: self.revision,
            columns: self.columns,
            show_grid_lines: self.show_grid_lines,
            tiles: self
                .tiles
                .as_slice()
                .iter()
                .map(TileSnapshot::from)
                .collect(),
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn ensure_flat_snapshot_ready(&mut self) {
        if self.flat_snapshot_dirty {
            self.rebuild_flat_snapshot();
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn flat_snapshot_slice(&self) -> &[f32] {
        &self.flat_snapshot
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.snapshot_dirty = true;
        self.flat_snapshot_dirty = true;
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn rebuild_flat_snapshot(&mut self) {
        let tiles = self.tiles.as_slice();
        let required_len = tiles.len() * TILE_FIELD_COUNT;
        if self.flat_snapshot.len() != required_len {
            self.flat_snapshot.resize(required_len, 0.0);
        }
        for (i, tile) in tiles.iter().enumerate() {
            let base = i * TILE_FIELD_COUNT;
            self.flat_snapshot[base] = tile.position.x as f32;
            self.flat_snapshot[base + 1] = tile.position.y as f32;
            self.flat_snapshot[base + 2] = tile.size.w as f32;
            self.flat_snapshot[base + 3] = tile.size.h as f32;
        }
        self.flat_snapshot_dirty = false;
    }
}

impl Default for GridData {
    fn default() -> Self {
        Self::new()
    }
}
