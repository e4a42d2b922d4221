use wasm_bindgen::prelude::*;

use crate::core::cell::Cell;
use crate::core::config::{DiagonalBias, FloorMode, GridConfig};
use crate::core::error::Result;

use super::frame_loop::FrameLoop;
use super::perf_stats::PerfStats;
use super::report::ActiveParticleReport;
use super::GridCore;

/// Out-of-bounds and occupied adds are normal while painting with the mouse;
/// they become `false` for JS and a debug line in the console.
fn placed(result: Result<bool>) -> bool {
    match result {
        Ok(placed) => placed,
        Err(e) => {
            log::debug!("sand not placed: {e}");
            false
        }
    }
}

fn to_js(report: &ActiveParticleReport) -> std::result::Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(report)?)
}

/// Opaque particle grid handle. JS releases it with `free()`.
#[wasm_bindgen]
pub struct ParticleGrid {
    core: GridCore,
}

#[wasm_bindgen]
impl ParticleGrid {
    /// Create an empty grid with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> std::result::Result<ParticleGrid, JsValue> {
        let core = GridCore::with_config(GridConfig::new(rows, cols))?;
        Ok(Self { core })
    }

    /// Create a grid from a JSON config (see `GridConfig`)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> std::result::Result<ParticleGrid, JsValue> {
        let core = GridCore::from_config_json(json)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    /// Add sand at a cell. False when out of bounds or already occupied.
    pub fn add_sand(&mut self, row: i32, col: i32) -> bool {
        placed(self.core.add_sand(row, col))
    }

    /// Add sand under a canvas pixel position
    pub fn add_sand_at_pixel(&mut self, x: f64, y: f64) -> bool {
        placed(self.core.add_sand_at_pixel(x, y))
    }

    /// Add sand in radius (brush). Returns cells filled.
    pub fn add_sand_in_radius(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        self.core.add_sand_in_radius(row, col, radius)
    }

    /// Remove sand at a cell
    pub fn remove_sand(&mut self, row: i32, col: i32) -> bool {
        match self.core.remove_sand(row, col) {
            Ok(removed) => removed,
            Err(e) => {
                log::debug!("nothing removed: {e}");
                false
            }
        }
    }

    /// Cell byte at a position (`cell_out_of_bounds()` outside the grid)
    pub fn cell(&self, row: i32, col: i32) -> u8 {
        Cell::id_or_out_of_bounds(self.core.cell(row, col))
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Step once and return `{ rows, cols, frame, active_particles }`
    pub fn update(&mut self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.core.update())
    }

    /// Current particles without stepping
    pub fn report(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.core.report())
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        self.core.report().to_json()
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// "left" | "right" | "alternate"
    pub fn set_diagonal_bias(&mut self, bias: &str) -> std::result::Result<(), JsValue> {
        self.core.set_diagonal_bias(bias.parse::<DiagonalBias>()?);
        Ok(())
    }

    /// "solid" | "open"
    pub fn set_floor(&mut self, floor: &str) -> std::result::Result<(), JsValue> {
        self.core.set_floor(floor.parse::<FloorMode>()?);
        Ok(())
    }

    /// Enable/disable skipping of settled chunks (perf/debug toggle).
    pub fn set_chunk_sleeping_enabled(&mut self, enabled: bool) {
        self.core.set_chunk_sleeping_enabled(enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Chunks awake when the last tick began (for debugging/stats)
    pub fn active_chunks(&self) -> usize {
        self.core.active_chunks()
    }

    pub fn total_chunks(&self) -> usize {
        self.core.total_chunks()
    }

    /// Get pointer to cell bytes (for JS rendering straight from memory)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }
}

/// Grid driven by the page's animation frames: ticks at the configured rate
/// and hands back the latest snapshot on every frame.
#[wasm_bindgen]
pub struct Simulation {
    inner: FrameLoop,
}

#[wasm_bindgen]
impl Simulation {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> std::result::Result<Simulation, JsValue> {
        let inner = FrameLoop::with_config(GridConfig::new(rows, cols))?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> std::result::Result<Simulation, JsValue> {
        let inner = FrameLoop::with_config(GridConfig::from_json(json)?)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.inner.core().particle_count() }

    pub fn add_sand(&mut self, row: i32, col: i32) -> bool {
        placed(self.inner.core_mut().add_sand(row, col))
    }

    pub fn add_sand_at_pixel(&mut self, x: f64, y: f64) -> bool {
        placed(self.inner.core_mut().add_sand_at_pixel(x, y))
    }

    pub fn add_sand_in_radius(&mut self, row: i32, col: i32, radius: i32) -> u32 {
        self.inner.core_mut().add_sand_in_radius(row, col, radius)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Call once per animation frame with the rAF timestamp. Ticks when due
    /// and returns the latest snapshot either way.
    pub fn frame(&mut self, now_ms: f64) -> std::result::Result<JsValue, JsValue> {
        self.inner.advance(now_ms);
        self.latest()
    }

    /// `frame` timed by the engine's own clock instead of a rAF timestamp
    #[wasm_bindgen(js_name = frameNow)]
    pub fn frame_now(&mut self) -> std::result::Result<JsValue, JsValue> {
        self.inner.advance_now();
        self.latest()
    }
}

impl Simulation {
    fn latest(&self) -> std::result::Result<JsValue, JsValue> {
        match self.inner.latest() {
            Some(report) => to_js(report),
            None => Ok(JsValue::NULL),
        }
    }
}
