//! GridCore - the particle grid engine
//!
//! GridCore only orchestrates:
//! - cell storage lives in spatial/grid
//! - which regions need scanning lives in spatial/chunks
//! - how a single particle falls lives in systems/powder
//!
//! The JS-facing classes (`ParticleGrid`, `Simulation`) wrap it in facade.rs.

use crate::chunks::ChunkGrid;
use crate::core::cell::Cell;
use crate::core::config::{DiagonalBias, FloorMode, GridConfig};
use crate::core::error::Result;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/chunk_processing.rs"]
mod chunk_processing;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/report.rs"]
mod report;
#[path = "render/snapshot.rs"]
mod snapshot;
#[path = "clock/clock.rs"]
mod clock;
#[path = "clock/frame_loop.rs"]
mod frame_loop;
mod facade;

pub use clock::TickClock;
pub use facade::{ParticleGrid, Simulation};
pub use frame_loop::FrameLoop;
pub use perf_stats::PerfStats;
pub use report::ActiveParticleReport;
pub use snapshot::SnapshotBuffer;

use perf_timer::PerfTimer;

/// The particle grid engine
pub struct GridCore {
    config: GridConfig,
    grid: Grid,
    chunks: ChunkGrid,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl GridCore {
    /// Create an empty grid with default settings. Dimensions are taken as
    /// given; use `with_config` for validated construction.
    pub fn new(rows: u32, cols: u32) -> Self {
        init::create_grid_core(GridConfig::new(rows, cols))
    }

    pub fn with_config(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(init::create_grid_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::with_config(GridConfig::from_json(json)?)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> u32 { self.grid.particle_count() }

    pub fn config(&self) -> &GridConfig { &self.config }

    /// Cell at `(row, col)`, `None` outside the grid
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.grid.get(row, col)
    }

    // === Commands ===

    /// Put sand at `(row, col)`. `Ok(false)` if the cell was already occupied.
    pub fn add_sand(&mut self, row: i32, col: i32) -> Result<bool> {
        commands::add_sand(self, row, col)
    }

    /// Put sand under a pixel position, using the configured cell size
    pub fn add_sand_at_pixel(&mut self, x: f64, y: f64) -> Result<bool> {
        commands::add_sand_at_pixel(self, x, y)
    }

    /// Add sand in radius (brush). Returns how many cells were filled.
    pub fn add_sand_in_radius(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        commands::add_sand_in_radius(self, row, col, radius)
    }

    /// Remove sand at `(row, col)`. `Ok(false)` if the cell was already empty.
    pub fn remove_sand(&mut self, row: i32, col: i32) -> Result<bool> {
        commands::remove_sand(self, row, col)
    }

    /// Empty every cell and reset the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Simulation ===

    /// Advance exactly one tick over the whole grid
    pub fn step(&mut self) {
        step::step(self);
    }

    /// One tick, then the report of every occupied cell
    pub fn update(&mut self) -> ActiveParticleReport {
        self.step();
        self.report()
    }

    /// Occupied cells in row-major order, without advancing
    pub fn report(&self) -> ActiveParticleReport {
        let mut out = ActiveParticleReport::default();
        self.fill_report(&mut out);
        out
    }

    /// Overwrite `out` with the current report, reusing its allocation
    pub fn fill_report(&self, out: &mut ActiveParticleReport) {
        report::fill_report(self, out);
    }

    // === Settings ===

    pub fn set_diagonal_bias(&mut self, bias: DiagonalBias) {
        settings::set_diagonal_bias(self, bias);
    }

    pub fn set_floor(&mut self, floor: FloorMode) {
        settings::set_floor(self, floor);
    }

    /// Enable/disable skipping of settled chunks (perf/debug toggle)
    pub fn set_chunk_sleeping_enabled(&mut self, enabled: bool) {
        settings::set_chunk_sleeping_enabled(self, enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Chunks ===

    /// Chunks awake when the last tick began. Chunks woken during the tick
    /// are scanned too but not counted.
    pub fn active_chunks(&self) -> usize {
        self.chunks.active_chunk_count()
    }

    pub fn total_chunks(&self) -> usize {
        self.chunks.total_chunks()
    }

    // === Raw buffer access ===

    /// Get pointer to the cell bytes (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
