//! Bridge - the free functions the page script imports.
//!
//! `wasm_bridge_init`, `add_sand` and `wasm_bridge_update` operate on one
//! grid owned by this module. WASM runs the page on a single thread, so the
//! grid sits in a thread-local `RefCell` rather than a `static mut`.
//!
//! The `bridge_*` functions carry the logic and return `GridError`; the
//! `#[wasm_bindgen]` wrappers below them only convert for JS.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::core::config::GridConfig;
use crate::core::error::{GridError, Result};
use crate::simulation::{ActiveParticleReport, GridCore};

thread_local! {
    static BRIDGE: RefCell<Option<GridCore>> = const { RefCell::new(None) };
}

/// Create the bridge grid. Returns false (and keeps the existing grid) when
/// one is already live.
pub fn bridge_init(config: GridConfig) -> Result<bool> {
    let core = GridCore::with_config(config)?;
    BRIDGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            log::warn!("wasm_bridge_init called twice; keeping the existing grid");
            return Ok(false);
        }
        log::info!("grid initialized: {}x{} cells", core.rows(), core.cols());
        *slot = Some(core);
        Ok(true)
    })
}

/// Run `f` against the bridge grid.
pub fn with_bridge<T>(f: impl FnOnce(&mut GridCore) -> T) -> Result<T> {
    BRIDGE.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .map(f)
            .ok_or(GridError::NotInitialized)
    })
}

pub fn bridge_initialized() -> bool {
    BRIDGE.with(|slot| slot.borrow().is_some())
}

/// Add sand to the bridge grid. Out-of-bounds and occupied cells are
/// dropped; only a missing grid is an error.
pub fn bridge_add_sand(row: i32, col: i32) -> Result<()> {
    match with_bridge(|core| core.add_sand(row, col))? {
        Ok(_) => Ok(()),
        Err(e) => {
            log::debug!("add_sand ignored: {e}");
            Ok(())
        }
    }
}

pub fn bridge_update() -> Result<ActiveParticleReport> {
    with_bridge(|core| core.update())
}

pub fn bridge_clear() -> Result<()> {
    with_bridge(|core| core.clear())
}

/// Drop the bridge grid. Returns whether there was one.
pub fn bridge_release() -> bool {
    BRIDGE.with(|slot| slot.borrow_mut().take().is_some())
}

// === JS surface ===

/// Allocate the grid with default settings. Call once before anything else.
#[wasm_bindgen]
pub fn wasm_bridge_init() {
    if let Err(e) = bridge_init(GridConfig::default()) {
        log::error!("wasm_bridge_init failed: {e}");
    }
}

/// Allocate the grid from a JSON config
#[wasm_bindgen]
pub fn wasm_bridge_init_with_config(json: &str) -> std::result::Result<(), JsValue> {
    bridge_init(GridConfig::from_json(json)?)?;
    Ok(())
}

/// Add a sand particle at grid coordinates
#[wasm_bindgen]
pub fn add_sand(row: i32, col: i32) -> std::result::Result<(), JsValue> {
    Ok(bridge_add_sand(row, col)?)
}

/// Advance one tick and return `{ rows, cols, frame, active_particles }`.
/// Called by the page script on its simulation cadence.
#[wasm_bindgen]
pub fn wasm_bridge_update() -> std::result::Result<JsValue, JsValue> {
    let report = bridge_update()?;
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

#[wasm_bindgen]
pub fn wasm_bridge_clear() -> std::result::Result<(), JsValue> {
    Ok(bridge_clear()?)
}

/// Release the grid memory
#[wasm_bindgen]
pub fn wasm_bridge_release() {
    if bridge_release() {
        log::info!("grid released");
    }
}
