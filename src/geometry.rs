//! Click-to-column arithmetic for the board drawing surface.
//!
//! The grid is centered within the surface, so the start offset depends on
//! the current surface size. Callers pass the geometry in on every call;
//! nothing is cached, so a resized surface can never go stale.

/// Offset that centers `count` cells of `cell_size`, separated by
/// `cell_gap`, within `extent`.
pub fn centered_start(extent: i32, cell_size: i32, cell_gap: i32, count: i32) -> i32 {
    (extent - (cell_size * count + cell_gap * (count - 1))) / 2
}

/// Map a pointer x coordinate to a logical column index.
///
/// Pure arithmetic, never panics. The result may fall outside `0..cols`
/// when the point lands in the margins; range checking is the caller's job.
pub fn resolve_column(
    point_x: i32,
    surface_width: i32,
    cell_size: i32,
    cell_gap: i32,
    cols: i32,
) -> i32 {
    let start = centered_start(surface_width, cell_size, cell_gap, cols);
    (point_x - start).div_euclid(cell_size + cell_gap)
}
