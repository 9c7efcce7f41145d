//! Responsive column derivation: viewport-width breakpoints mapped to column
//! counts. The view layer re-runs this on resize and pushes the result into
//! the store, whose no-op-on-equal rule absorbs redundant notifications.

/// A viewport breakpoint: minimum width in CSS pixels and the column count it
/// selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_width: f64,
    pub columns: i32,
}

/// Ordered largest-first; the first matching entry wins.
pub const BREAKPOINTS: [Breakpoint; 3] = [
    Breakpoint {
        min_width: 1024.0,
        columns: 12,
    },
    Breakpoint {
        min_width: 768.0,
        columns: 8,
    },
    Breakpoint {
        min_width: 640.0,
        columns: 6,
    },
];

/// Columns for viewports below the smallest breakpoint
pub const FALLBACK_COLUMNS: i32 = 4;

/// Maps a viewport width to a column count by scanning the breakpoint table
/// top to bottom.
pub fn columns_for_width(width: f64) -> i32 {
    for breakpoint in &BREAKPOINTS {
        if width >= breakpoint.min_width {
            return breakpoint.columns;
        }
    }
    FALLBACK_COLUMNS
}

/// Current viewport width in CSS pixels, when a window exists.
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Outside a browser there is no viewport to measure.
#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}

/// Column count for the current viewport, falling back to the smallest-screen
/// configuration when no window is available.
pub fn viewport_columns() -> i32 {
    viewport_width().map(columns_for_width).unwrap_or(FALLBACK_COLUMNS)
}
