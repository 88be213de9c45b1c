pub const ROWS: usize = 6;
pub const COLS: usize = 7;

// Surface geometry: cell diameter and the gap between adjacent cells, in
// pixels, plus the default width of the drawing surface.
pub const CELL_SIZE: i32 = 45;
pub const CELL_GAP: i32 = 10;
pub const SURFACE_WIDTH: i32 = 800;
