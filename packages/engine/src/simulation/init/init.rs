use crate::chunks::ChunkGrid;
use crate::core::config::GridConfig;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::GridCore;

pub(super) fn create_grid_core(config: GridConfig) -> GridCore {
    let mut chunks = ChunkGrid::new(config.rows, config.cols);
    if !config.chunk_sleeping {
        chunks.set_sleeping_enabled(false);
    }
    log::debug!(
        "allocating {}x{} grid ({} chunks)",
        config.rows,
        config.cols,
        chunks.total_chunks()
    );

    GridCore {
        grid: Grid::new(config.rows, config.cols),
        chunks,
        config,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
