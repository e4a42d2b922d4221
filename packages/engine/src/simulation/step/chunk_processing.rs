use crate::chunks::CHUNK_SIZE;
use crate::core::config::FloorMode;
use crate::systems::powder::{self, FallOutcome};

use super::GridCore;

#[derive(Default)]
pub(super) struct RowTotals {
    pub(super) scanned: u32,
    pub(super) moved: u32,
    pub(super) removed: u32,
}

/// Scan one row left to right, chunk by chunk, skipping sleeping chunks.
///
/// Wake-ups from moves take effect immediately, so a chunk further along
/// this row (or in a row above) can be woken by this scan.
pub(super) fn process_row(
    core: &mut GridCore,
    row: u32,
    chunks_x: u32,
    diagonals: [i32; 2],
    floor: FloorMode,
    totals: &mut RowTotals,
) {
    let cy = row / CHUNK_SIZE;
    let cols = core.grid.cols();
    for cx in 0..chunks_x {
        if !core.chunks.is_awake(cx, cy) {
            continue;
        }
        let start = cx * CHUNK_SIZE;
        let end = (start + CHUNK_SIZE).min(cols);
        for col in start..end {
            totals.scanned += 1;
            if !core.grid.get_unchecked(row, col).is_sand() {
                continue;
            }
            match powder::next_position(&core.grid, row, col, diagonals, floor) {
                FallOutcome::Stay => {}
                FallOutcome::Move { row: to_row, col: to_col } => {
                    core.grid.move_particle(row, col, to_row, to_col);
                    core.chunks.wake_around(row, col);
                    core.chunks.wake_around(to_row, to_col);
                    totals.moved += 1;
                }
                FallOutcome::Exit => {
                    core.grid.clear_cell(row, col);
                    core.chunks.wake_around(row, col);
                    totals.removed += 1;
                }
            }
        }
    }
}
