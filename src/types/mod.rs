pub mod action;
pub mod snapshot;
pub mod tile;

pub use action::GridAction;
pub use snapshot::{GridSnapshot, TileSnapshot, TILE_FIELD_COUNT};
pub use tile::{GridPosition, PlacedTile, TileSize};
