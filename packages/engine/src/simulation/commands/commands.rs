use crate::core::error::{GridError, Result};

use super::GridCore;

/// Validate a signed coordinate against the grid extent.
fn checked(core: &GridCore, row: i32, col: i32) -> Result<(u32, u32)> {
    if core.grid.in_bounds(row, col) {
        Ok((row as u32, col as u32))
    } else {
        Err(GridError::OutOfBounds {
            row,
            col,
            rows: core.grid.rows(),
            cols: core.grid.cols(),
        })
    }
}

pub(super) fn add_sand(core: &mut GridCore, row: i32, col: i32) -> Result<bool> {
    let (row, col) = checked(core, row, col)?;
    if !core.grid.fill(row, col) {
        return Ok(false);
    }
    core.chunks.wake_around(row, col);
    Ok(true)
}

pub(super) fn add_sand_at_pixel(core: &mut GridCore, x: f64, y: f64) -> Result<bool> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GridError::NonFinitePixel { x, y });
    }
    let cell_size = core.config.cell_size as f64;
    // `as` saturates, so far-off pixels stay out of bounds instead of wrapping
    let col = (x / cell_size).floor() as i32;
    let row = (y / cell_size).floor() as i32;
    add_sand(core, row, col)
}

pub(super) fn add_sand_in_radius(core: &mut GridCore, row: i32, col: i32, radius: i32) -> u32 {
    if radius < 0 {
        return 0;
    }
    // i64 bounds and u64 squares: any i32 centre and radius stay exact
    let (row, col, radius) = (i64::from(row), i64::from(col), i64::from(radius));
    let last_row = i64::from(core.grid.rows()) - 1;
    let last_col = i64::from(core.grid.cols()) - 1;
    let r2 = radius.unsigned_abs().pow(2);

    let mut placed = 0;
    // Only the part of the bounding box inside the grid is visited
    for r in (row - radius).max(0)..=(row + radius).min(last_row) {
        let dr2 = (r - row).unsigned_abs().pow(2);
        for c in (col - radius).max(0)..=(col + radius).min(last_col) {
            if dr2 + (c - col).unsigned_abs().pow(2) > r2 {
                continue;
            }
            if core.grid.fill(r as u32, c as u32) {
                core.chunks.wake_around(r as u32, c as u32);
                placed += 1;
            }
        }
    }
    placed
}

pub(super) fn remove_sand(core: &mut GridCore, row: i32, col: i32) -> Result<bool> {
    let (row, col) = checked(core, row, col)?;
    if !core.grid.clear_cell(row, col) {
        return Ok(false);
    }
    core.chunks.wake_around(row, col);
    Ok(true)
}

pub(super) fn clear(core: &mut GridCore) {
    core.grid.clear();
    core.chunks.mark_all_awake();
    core.frame = 0;
    core.perf_stats.reset();
}
