mod tile_store;

pub use tile_store::TileStore;
