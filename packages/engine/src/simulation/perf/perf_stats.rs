use wasm_bindgen::prelude::*;

/// Per-step counters, filled only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) cells_scanned: u32,
    pub(super) particles_moved: u32,
    pub(super) particles_removed: u32,
    pub(super) active_chunks: u32,
    pub(super) total_chunks: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    pub fn step_ms(&self) -> f64 { self.step_ms }
    pub fn cells_scanned(&self) -> u32 { self.cells_scanned }
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    /// Particles that fell through an open floor
    pub fn particles_removed(&self) -> u32 { self.particles_removed }
    pub fn active_chunks(&self) -> u32 { self.active_chunks }
    pub fn total_chunks(&self) -> u32 { self.total_chunks }
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
