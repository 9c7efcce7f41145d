//! Pure tile placement engine: collision detection between axis-aligned tile
//! rectangles and the row-major first-fit spot search. No state, no I/O;
//! callers run these before dispatching store actions.

mod collision;
mod finder;

pub use collision::check_collision;
pub use finder::{can_place_at, find_available_spot, fits_within};
