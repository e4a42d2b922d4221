use crate::core::config::{DiagonalBias, FloorMode};

use super::perf_stats::PerfStats;
use super::GridCore;

// Rule changes can unsettle particles inside sleeping chunks, so every
// setter that touches the rule rescans the whole grid once.

pub(super) fn set_diagonal_bias(core: &mut GridCore, bias: DiagonalBias) {
    core.config.diagonal_bias = bias;
    core.chunks.mark_all_awake();
}

pub(super) fn set_floor(core: &mut GridCore, floor: FloorMode) {
    core.config.floor = floor;
    core.chunks.mark_all_awake();
}

pub(super) fn set_chunk_sleeping_enabled(core: &mut GridCore, enabled: bool) {
    core.config.chunk_sleeping = enabled;
    core.chunks.set_sleeping_enabled(enabled);
}

pub(super) fn enable_perf_metrics(core: &mut GridCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &GridCore) -> PerfStats {
    core.perf_stats.clone()
}
