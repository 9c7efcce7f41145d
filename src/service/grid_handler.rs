use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

use crate::logic::GridLogic;
use crate::responsive;
use crate::types::{GridAction, GridPosition, PlacedTile, TileSize};

/// JS-facing handle to one grid store scope.
///
/// The UI dispatches actions and reads snapshots through this handler; after
/// `destroy` every call throws, since using a torn-down store is a
/// programming error on the caller's side.
#[wasm_bindgen]
pub struct GridHandler {
    logic: GridLogic,
}

#[wasm_bindgen]
impl GridHandler {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            logic: GridLogic::new(),
        }
    }

    /// Create a handler with an explicit column count and row search budget
    #[wasm_bindgen]
    pub fn init(columns: i32, max_rows: i32) -> Self {
        let mut handler = Self {
            logic: GridLogic::with_columns(columns),
        };
        // scope is freshly created, cannot fail
        let _ = handler.logic.set_max_rows(max_rows);
        handler
    }

    /// Add a pre-positioned tile as-is. No collision check is performed;
    /// callers are expected to have validated the spot first.
    #[wasm_bindgen]
    pub fn add_tile(&mut self, id: String, x: i32, y: i32, w: i32, h: i32) -> Result<(), JsError> {
        let tile = PlacedTile::new(id, GridPosition::new(x, y), TileSize::new(w, h));
        self.logic.dispatch(GridAction::AddTile { tile })?;
        Ok(())
    }

    /// Find a spot, generate an id, and add the tile in one step. Returns the
    /// new tile's id, or null when the grid has no room.
    #[wasm_bindgen]
    pub fn place_tile(&mut self, w: i32, h: i32) -> Result<Option<String>, JsError> {
        Ok(self.logic.place_tile(TileSize::new(w, h))?)
    }

    /// Remove a tile by id; returns whether a tile was removed
    #[wasm_bindgen]
    pub fn remove_tile(&mut self, id: &str) -> Result<bool, JsError> {
        Ok(self.logic.dispatch(GridAction::RemoveTile {
            tile_id: id.to_string(),
        })?)
    }

    /// Reposition a tile by id, as-is; returns whether a tile was moved
    #[wasm_bindgen]
    pub fn move_tile(&mut self, id: &str, x: i32, y: i32) -> Result<bool, JsError> {
        Ok(self.logic.dispatch(GridAction::MoveTile {
            tile_id: id.to_string(),
            new_position: GridPosition::new(x, y),
        })?)
    }

    #[wasm_bindgen]
    pub fn toggle_grid_lines(&mut self) -> Result<(), JsError> {
        self.logic.dispatch(GridAction::ToggleGridLines)?;
        Ok(())
    }

    /// Set the column count; returns whether it actually changed
    #[wasm_bindgen]
    pub fn set_columns(&mut self, columns: i32) -> Result<bool, JsError> {
        Ok(self
            .logic
            .dispatch(GridAction::SetGridColumns { columns })?)
    }

    /// First open slot for a w x h tile, as `{x, y}` or null
    #[wasm_bindgen]
    pub fn find_available_spot(&self, w: i32, h: i32) -> Result<JsValue, JsError> {
        let spot = self.logic.find_spot(TileSize::new(w, h))?;
        Ok(serde_wasm_bindgen::to_value(&spot).unwrap_or(JsValue::NULL))
    }

    /// Whether a w x h tile at (x, y) would overlap any placed tile
    #[wasm_bindgen]
    pub fn check_collision(&self, x: i32, y: i32, w: i32, h: i32) -> Result<bool, JsError> {
        Ok(self
            .logic
            .collides(GridPosition::new(x, y), TileSize::new(w, h))?)
    }

    /// Whether a w x h tile could legally sit at (x, y): in bounds and clear
    #[wasm_bindgen]
    pub fn can_place_at(&self, x: i32, y: i32, w: i32, h: i32) -> Result<bool, JsError> {
        Ok(self
            .logic
            .placeable_at(GridPosition::new(x, y), TileSize::new(w, h))?)
    }

    /// Derive columns from a viewport width and push them into the store
    #[wasm_bindgen]
    pub fn set_columns_for_width(&mut self, width: f64) -> Result<bool, JsError> {
        Ok(self.logic.sync_columns_for_width(width)?)
    }

    /// Derive columns from the live viewport; falls back to the
    /// smallest-screen column count when no window is available
    #[wasm_bindgen]
    pub fn sync_viewport_columns(&mut self) -> Result<bool, JsError> {
        let columns = responsive::viewport_columns();
        Ok(self
            .logic
            .dispatch(GridAction::SetGridColumns { columns })?)
    }

    #[wasm_bindgen]
    pub fn get_columns(&self) -> Result<i32, JsError> {
        Ok(self.logic.columns()?)
    }

    #[wasm_bindgen]
    pub fn is_showing_grid_lines(&self) -> Result<bool, JsError> {
        Ok(self.logic.show_grid_lines()?)
    }

    #[wasm_bindgen]
    pub fn get_max_rows(&self) -> Result<i32, JsError> {
        Ok(self.logic.max_rows()?)
    }

    #[wasm_bindgen]
    pub fn get_tile_count(&self) -> Result<usize, JsError> {
        Ok(self.logic.tile_count()?)
    }

    #[wasm_bindgen]
    pub fn get_revision(&self) -> Result<u64, JsError> {
        Ok(self.logic.revision()?)
    }

    /// Id of the tile covering cell (x, y), or null
    #[wasm_bindgen]
    pub fn get_tile_at(&self, x: i32, y: i32) -> Result<Option<String>, JsError> {
        Ok(self.logic.tile_at(x, y)?.map(|tile| tile.id.clone()))
    }

    #[wasm_bindgen]
    pub fn get_occupied_cell_count(&self) -> Result<i32, JsError> {
        Ok(self.logic.occupied_cell_count()?)
    }

    /// Cells the debug overlay enumerates when grid lines are shown
    #[wasm_bindgen]
    pub fn get_debug_cell_count(&self) -> Result<i32, JsError> {
        Ok(self.logic.debug_cell_count()?)
    }

    /// Full state snapshot when it changed since the last call, else null
    #[wasm_bindgen]
    pub fn get_snapshot(&mut self) -> Result<JsValue, JsError> {
        match self.logic.request_snapshot()? {
            Some(snapshot) => {
                Ok(serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL))
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Placed-tile geometry as [x, y, w, h] per tile, insertion order
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn get_flat_snapshot(&mut self) -> Result<js_sys::Float32Array, JsError> {
        let slice = self.logic.request_flat_snapshot()?;
        Ok(js_sys::Float32Array::from(slice))
    }

    /// End the store scope; later calls throw
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.logic.destroy();
    }
}

impl Default for GridHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GridHandler {
    pub fn logic(&self) -> &GridLogic {
        &self.logic
    }

    pub fn logic_mut(&mut self) -> &mut GridLogic {
        &mut self.logic
    }
}
