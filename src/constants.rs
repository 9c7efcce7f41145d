// Shared grid constants

/// Default column count before the responsive derivation takes over
pub const DEFAULT_GRID_COLUMNS: i32 = 12;

/// Row budget for first-fit searches; deep enough to behave as an unbounded grid
pub const DEFAULT_MAX_ROWS: i32 = 100;

/// Rows of debug cells enumerated when grid lines are visible
pub const DEBUG_GRID_ROWS: i32 = 10;
