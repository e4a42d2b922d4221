use super::{PerfTimer, GridCore};

pub(super) fn step(core: &mut GridCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Chunks woken since the last tick become the scan set
    core.chunks.begin_frame();

    let diagonals = core.config.diagonal_bias.offsets(core.frame);
    let floor = core.config.floor;
    let (chunks_x, _) = core.chunks.dimensions();

    // Bottom to top: a particle only ever moves into a row that was already
    // scanned this tick, so nothing moves twice.
    let mut totals = super::chunk_processing::RowTotals::default();
    for row in (0..core.grid.rows()).rev() {
        if !core.grid.row_has_data(row) {
            continue;
        }
        super::chunk_processing::process_row(core, row, chunks_x, diagonals, floor, &mut totals);
    }

    if totals.removed > 0 {
        log::debug!("frame {}: {} particles fell out of the grid", core.frame, totals.removed);
    }

    if perf_on {
        core.perf_stats.cells_scanned = totals.scanned;
        core.perf_stats.particles_moved = totals.moved;
        core.perf_stats.particles_removed = totals.removed;
        core.perf_stats.active_chunks = core.chunks.active_chunk_count() as u32;
        core.perf_stats.total_chunks = core.chunks.total_chunks() as u32;
        core.perf_stats.particle_count = core.grid.particle_count();
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
