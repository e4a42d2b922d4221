//! Falling-sand particle engine in WASM
//!
//! Architecture:
//! - core/        - cells, configuration, errors, logging
//! - spatial/     - grid storage and chunk activity tracking
//! - systems/     - the sand fall rule
//! - simulation/  - GridCore orchestration and the JS classes
//! - api/         - module-level functions the page script imports

pub mod core;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

pub use spatial::chunks;
pub use spatial::grid;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Runs when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging();
    log::info!("falling sand engine {} loaded", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::cell::Cell;
pub use crate::core::config::{DiagonalBias, FloorMode, GridConfig};
pub use crate::core::error::GridError;
pub use simulation::{
    ActiveParticleReport, FrameLoop, GridCore, ParticleGrid, PerfStats, Simulation,
    SnapshotBuffer, TickClock,
};

// Export cell constants for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { Cell::Empty.id() }
#[wasm_bindgen]
pub fn cell_sand() -> u8 { Cell::Sand.id() }
#[wasm_bindgen]
pub fn cell_out_of_bounds() -> u8 { crate::core::cell::CELL_OUT_OF_BOUNDS }
