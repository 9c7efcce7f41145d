use log::{debug, warn};

use crate::data::GridData;
use crate::error::GridError;
use crate::placement::{can_place_at, check_collision, find_available_spot};
use crate::responsive::columns_for_width;
use crate::types::{GridAction, GridPosition, GridSnapshot, PlacedTile, TileSize};

/// The grid store: reducer-driven state behind a destroyable scope.
///
/// `destroy` ends the scope; every read or dispatch afterwards fails with
/// [`GridError::OutsideScope`]. That mirrors the usage contract of the view
/// layer, where touching the store without a provider is a programming error.
pub struct GridLogic {
    data: Option<GridData>,
}

impl GridLogic {
    pub fn new() -> Self {
        Self {
            data: Some(GridData::new()),
        }
    }

    pub fn with_columns(columns: i32) -> Self {
        Self {
            data: Some(GridData::with_columns(columns)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Applies one store action and reports whether the state changed.
    ///
    /// The reducer is permissive by design: `AddTile` and `MoveTile` accept
    /// whatever geometry they are given. Callers preserve the non-overlap
    /// invariant by consulting the placement engine first.
    pub fn dispatch(&mut self, action: GridAction) -> Result<bool, GridError> {
        let data = self.data_mut()?;
        debug!("grid action: {:?}", action);
        let changed = match action {
            GridAction::AddTile { tile } => {
                data.push_tile(tile);
                true
            }
            GridAction::RemoveTile { tile_id } => data.remove_tile(&tile_id),
            GridAction::MoveTile {
                tile_id,
                new_position,
            } => data.move_tile(&tile_id, new_position),
            GridAction::ToggleGridLines => {
                data.toggle_grid_lines();
                true
            }
            GridAction::SetGridColumns { columns } => data.set_columns(columns),
        };
        Ok(changed)
    }

    /// Finds a spot, generates an id, and adds the tile in one step. Returns
    /// the new tile's id, or `None` when the grid has no room for `size`.
    pub fn place_tile(&mut self, size: TileSize) -> Result<Option<String>, GridError> {
        let data = self.data_mut()?;
        let spot = find_available_spot(size, data.tiles(), data.columns(), data.max_rows());
        match spot {
            Some(position) => {
                let id = data.next_tile_id();
                data.push_tile(PlacedTile::new(id.clone(), position, size));
                Ok(Some(id))
            }
            None => {
                warn!(
                    "no open {}x{} slot within {} columns x {} rows",
                    size.w,
                    size.h,
                    data.columns(),
                    data.max_rows()
                );
                Ok(None)
            }
        }
    }

    /// First open slot for `size` under the current configuration
    pub fn find_spot(&self, size: TileSize) -> Result<Option<GridPosition>, GridError> {
        let data = self.data()?;
        Ok(find_available_spot(
            size,
            data.tiles(),
            data.columns(),
            data.max_rows(),
        ))
    }

    pub fn collides(&self, position: GridPosition, size: TileSize) -> Result<bool, GridError> {
        Ok(check_collision(position, size, self.data()?.tiles()))
    }

    pub fn placeable_at(&self, position: GridPosition, size: TileSize) -> Result<bool, GridError> {
        let data = self.data()?;
        Ok(can_place_at(
            position,
            size,
            data.tiles(),
            data.columns(),
            data.max_rows(),
        ))
    }

    /// Derives the column count for `width` from the breakpoint table and
    /// pushes it into the store. Reports whether the count actually changed.
    pub fn sync_columns_for_width(&mut self, width: f64) -> Result<bool, GridError> {
        let columns = columns_for_width(width);
        self.dispatch(GridAction::SetGridColumns { columns })
    }

    pub fn columns(&self) -> Result<i32, GridError> {
        Ok(self.data()?.columns())
    }

    pub fn show_grid_lines(&self) -> Result<bool, GridError> {
        Ok(self.data()?.show_grid_lines())
    }

    pub fn max_rows(&self) -> Result<i32, GridError> {
        Ok(self.data()?.max_rows())
    }

    pub fn set_max_rows(&mut self, max_rows: i32) -> Result<(), GridError> {
        self.data_mut()?.set_max_rows(max_rows);
        Ok(())
    }

    pub fn revision(&self) -> Result<u64, GridError> {
        Ok(self.data()?.revision())
    }

    pub fn tile_count(&self) -> Result<usize, GridError> {
        Ok(self.data()?.tile_count())
    }

    pub fn tile(&self, tile_id: &str) -> Result<Option<&PlacedTile>, GridError> {
        Ok(self.data()?.tile(tile_id))
    }

    pub fn tiles(&self) -> Result<&[PlacedTile], GridError> {
        Ok(self.data()?.tiles())
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Result<Option<&PlacedTile>, GridError> {
        Ok(self.data()?.tile_at(x, y))
    }

    pub fn occupied_cell_count(&self) -> Result<i32, GridError> {
        Ok(self.data()?.occupied_cell_count())
    }

    pub fn debug_cell_count(&self) -> Result<i32, GridError> {
        Ok(self.data()?.debug_cell_count())
    }

    /// Current state when it changed since the last request, `None` when the
    /// last snapshot is still valid.
    pub fn request_snapshot(&mut self) -> Result<Option<GridSnapshot>, GridError> {
        let data = self.data_mut()?;
        if !data.snapshot_dirty() {
            return Ok(None);
        }
        Ok(Some(data.build_snapshot()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn request_flat_snapshot(&mut self) -> Result<&[f32], GridError> {
        let data = self.data_mut()?;
        data.ensure_flat_snapshot_ready();
        Ok(data.flat_snapshot_slice())
    }

    /// Ends the scope. Idempotent; all later reads and dispatches fail.
    pub fn destroy(&mut self) {
        self.data = None;
    }

    fn data(&self) -> Result<&GridData, GridError> {
        self.data.as_ref().ok_or(GridError::OutsideScope)
    }

    fn data_mut(&mut self) -> Result<&mut GridData, GridError> {
        self.data.as_mut().ok_or(GridError::OutsideScope)
    }
}

impl Default for GridLogic {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GRID_COLUMNS;

    fn tile(id: &str, x: i32, y: i32, size: TileSize) -> PlacedTile {
        PlacedTile::new(id, GridPosition::new(x, y), size)
    }

    #[test]
    fn add_then_remove_restores_the_prior_tile_sequence() {
        let mut logic = GridLogic::new();
        logic
            .dispatch(GridAction::AddTile {
                tile: tile("a", 1, 1, TileSize::UNIT_1X1),
            })
            .unwrap();
        logic
            .dispatch(GridAction::AddTile {
                tile: tile("b", 2, 1, TileSize::UNIT_1X1),
            })
            .unwrap();
        let before: Vec<String> = logic.tiles().unwrap().iter().map(|t| t.id.clone()).collect();

        logic
            .dispatch(GridAction::AddTile {
                tile: tile("c", 3, 1, TileSize::UNIT_1X1),
            })
            .unwrap();
        logic
            .dispatch(GridAction::RemoveTile {
                tile_id: "c".into(),
            })
            .unwrap();

        let after: Vec<String> = logic.tiles().unwrap().iter().map(|t| t.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn remove_and_move_of_missing_ids_change_nothing() {
        let mut logic = GridLogic::new();
        assert!(!logic
            .dispatch(GridAction::RemoveTile {
                tile_id: "ghost".into()
            })
            .unwrap());
        assert!(!logic
            .dispatch(GridAction::MoveTile {
                tile_id: "ghost".into(),
                new_position: GridPosition::new(2, 2),
            })
            .unwrap());
        assert_eq!(logic.revision().unwrap(), 0);
    }

    #[test]
    fn move_repositions_an_existing_tile() {
        let mut logic = GridLogic::new();
        logic
            .dispatch(GridAction::AddTile {
                tile: tile("a", 1, 1, TileSize::UNIT_1X1),
            })
            .unwrap();
        assert!(logic
            .dispatch(GridAction::MoveTile {
                tile_id: "a".into(),
                new_position: GridPosition::new(5, 3),
            })
            .unwrap());
        assert_eq!(
            logic.tile("a").unwrap().unwrap().position,
            GridPosition::new(5, 3)
        );
    }

    #[test]
    fn toggle_grid_lines_flips_the_flag() {
        let mut logic = GridLogic::new();
        assert!(!logic.show_grid_lines().unwrap());
        logic.dispatch(GridAction::ToggleGridLines).unwrap();
        assert!(logic.show_grid_lines().unwrap());
        logic.dispatch(GridAction::ToggleGridLines).unwrap();
        assert!(!logic.show_grid_lines().unwrap());
    }

    #[test]
    fn setting_the_current_column_count_is_a_no_change_dispatch() {
        let mut logic = GridLogic::new();
        let changed = logic
            .dispatch(GridAction::SetGridColumns {
                columns: DEFAULT_GRID_COLUMNS,
            })
            .unwrap();
        assert!(!changed);
        assert_eq!(logic.revision().unwrap(), 0);

        let changed = logic
            .dispatch(GridAction::SetGridColumns { columns: 8 })
            .unwrap();
        assert!(changed);
        assert_eq!(logic.columns().unwrap(), 8);
    }

    #[test]
    fn place_tile_fills_row_major_and_reports_a_full_grid() {
        let mut logic = GridLogic::with_columns(2);
        logic.set_max_rows(1).unwrap();

        let first = logic.place_tile(TileSize::UNIT_1X1).unwrap();
        assert_eq!(first.as_deref(), Some("tile-1"));
        assert_eq!(
            logic.tile("tile-1").unwrap().unwrap().position,
            GridPosition::new(1, 1)
        );

        let second = logic.place_tile(TileSize::UNIT_1X1).unwrap();
        assert_eq!(second.as_deref(), Some("tile-2"));
        assert_eq!(
            logic.tile("tile-2").unwrap().unwrap().position,
            GridPosition::new(2, 1)
        );

        assert_eq!(logic.place_tile(TileSize::UNIT_1X1).unwrap(), None);
        assert_eq!(logic.tile_count().unwrap(), 2);
    }

    #[test]
    fn placed_tiles_never_overlap() {
        let mut logic = GridLogic::with_columns(4);
        logic.set_max_rows(4).unwrap();
        for _ in 0..5 {
            logic.place_tile(TileSize::UNIT_2X1).unwrap();
        }
        let tiles = logic.tiles().unwrap().to_vec();
        for (i, tile) in tiles.iter().enumerate() {
            let others: Vec<PlacedTile> = tiles
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, t)| t.clone())
                .collect();
            assert!(
                !check_collision(tile.position, tile.size, &others),
                "tile {} overlaps a neighbor",
                tile.id
            );
        }
    }

    #[test]
    fn sync_columns_follows_the_breakpoint_table() {
        let mut logic = GridLogic::new();
        assert!(logic.sync_columns_for_width(800.0).unwrap());
        assert_eq!(logic.columns().unwrap(), 8);
        // same breakpoint again is absorbed by the no-op rule
        assert!(!logic.sync_columns_for_width(900.0).unwrap());
        assert!(logic.sync_columns_for_width(320.0).unwrap());
        assert_eq!(logic.columns().unwrap(), 4);
    }

    #[test]
    fn snapshots_are_only_rebuilt_after_changes() {
        let mut logic = GridLogic::new();
        let first = logic.request_snapshot().unwrap();
        assert!(first.is_some());
        assert!(logic.request_snapshot().unwrap().is_none());

        logic.place_tile(TileSize::UNIT_1X1).unwrap();
        let snapshot = logic.request_snapshot().unwrap().unwrap();
        assert_eq!(snapshot.tiles.len(), 1);
        assert_eq!(snapshot.revision, logic.revision().unwrap());

        // a no-change dispatch must not dirty the snapshot
        let columns = logic.columns().unwrap();
        logic
            .dispatch(GridAction::SetGridColumns { columns })
            .unwrap();
        assert!(logic.request_snapshot().unwrap().is_none());
    }

    #[test]
    fn destroyed_scope_rejects_reads_and_dispatches() {
        let mut logic = GridLogic::new();
        logic.destroy();
        assert!(!logic.is_active());
        assert_eq!(logic.columns(), Err(GridError::OutsideScope));
        assert_eq!(logic.tile_count(), Err(GridError::OutsideScope));
        assert_eq!(
            logic.dispatch(GridAction::ToggleGridLines),
            Err(GridError::OutsideScope)
        );
        assert_eq!(
            logic.place_tile(TileSize::UNIT_1X1),
            Err(GridError::OutsideScope)
        );
        // destroy stays idempotent
        logic.destroy();
        assert_eq!(logic.revision(), Err(GridError::OutsideScope));
    }
}
