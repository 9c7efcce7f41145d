//! Tile grid engine for the Tagesbegleiter dashboard.
//!
//! The JS view layer owns rendering and input; this crate owns the logic: a
//! pure placement engine (collision detection and row-major first-fit spot
//! search), a reducer-driven store for placed tiles with change-tracked
//! snapshots, and the responsive breakpoint-to-columns derivation. Everything
//! is synchronous and in-memory, reached from JS through [`GridHandler`].

pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod placement;
pub mod responsive;
pub mod service;
pub mod types;

pub use error::GridError;
pub use logic::GridLogic;
pub use placement::{can_place_at, check_collision, find_available_spot};
pub use service::GridHandler;
pub use types::{GridAction, GridPosition, GridSnapshot, PlacedTile, TileSize};
