//! Screen layout constants shared by the mobile UI.
//!
//! All values are in density-independent points.

/// Horizontal padding on each side of a screen.
pub const SCREEN_PADDING: f32 = 16.0;

/// Vertical padding at the top and bottom of scrollable content.
pub const CONTENT_PADDING_VERTICAL: f32 = 12.0;

/// Gap between grid cells.
pub const GRID_GAP: f32 = 12.0;

/// Width breakpoints
pub mod breakpoints {
    pub const SMALL: f32 = 360.0;
    pub const MEDIUM: f32 = 600.0;
    pub const LARGE: f32 = 900.0;
    pub const XLARGE: f32 = 1200.0;
}

/// Number of grid columns for a screen of the given width.
pub fn grid_columns(screen_width: f32) -> u32 {
    if screen_width < breakpoints::MEDIUM {
        2
    } else if screen_width < breakpoints::LARGE {
        3
    } else if screen_width < breakpoints::XLARGE {
        4
    } else {
        6
    }
}

/// Width of one grid cell when `columns` cells share a row, after screen
/// padding and inter-cell gaps. Never negative; zero columns counts as one.
pub fn grid_item_width(screen_width: f32, columns: u32) -> f32 {
    let columns = columns.max(1);
    let gaps = GRID_GAP * (columns - 1) as f32;
    let usable = screen_width - 2.0 * SCREEN_PADDING - gaps;
    (usable / columns as f32).max(0.0)
}
