use super::tile::{GridPosition, PlacedTile};

/// Actions accepted by the grid store reducer.
///
/// The store applies these blindly: `AddTile` and `MoveTile` perform no
/// collision validation, so callers keep the non-overlap invariant by running
/// the placement engine before dispatching.
#[derive(Debug, Clone, PartialEq)]
pub enum GridAction {
    AddTile { tile: PlacedTile },
    RemoveTile { tile_id: String },
    MoveTile { tile_id: String, new_position: GridPosition },
    ToggleGridLines,
    SetGridColumns { columns: i32 },
}
