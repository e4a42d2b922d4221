use serde::{Deserialize, Serialize};

use super::GridCore;

/// What the page script draws each frame.
///
/// Serialised to JS as `{ rows, cols, frame, active_particles: [[row, col], ...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveParticleReport {
    pub rows: u32,
    pub cols: u32,
    /// Ticks completed when the report was taken.
    pub frame: u64,
    /// Every occupied cell, row-major.
    pub active_particles: Vec<(u32, u32)>,
}

impl ActiveParticleReport {
    pub fn len(&self) -> usize {
        self.active_particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_particles.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(super) fn fill_report(core: &GridCore, out: &mut ActiveParticleReport) {
    out.rows = core.grid.rows();
    out.cols = core.grid.cols();
    out.frame = core.frame;
    out.active_particles.clear();
    out.active_particles.reserve(core.grid.particle_count() as usize);
    core.grid.collect_particles(&mut out.active_particles);
}
