//! Grid configuration
//!
//! Loaded from JSON with camelCase keys. Every field is optional and falls
//! back to the defaults below.
//!
//! ```json
//! { "rows": 200, "cols": 300, "cellSize": 4, "diagonalBias": "left",
//!   "floor": "solid", "chunkSleeping": true, "tickIntervalMs": 16.667 }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{GridError, Result};

/// Canvas the page script creates (pixels).
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
/// Pixels per cell edge.
pub const DEFAULT_CELL_SIZE: u32 = 4;
/// 60 ticks per second.
pub const DEFAULT_TICK_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Largest accepted row or column count. Keeps every coordinate
/// representable as a JS-side `i32`.
pub const MAX_DIMENSION: u32 = 1 << 14;

/// Which diagonal a blocked particle tries first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagonalBias {
    /// Down-left, then down-right.
    #[default]
    Left,
    /// Down-right, then down-left.
    Right,
    /// Left on even frames, right on odd frames.
    Alternate,
}

impl DiagonalBias {
    /// Column offsets to try, in order, for the given frame.
    #[inline]
    pub fn offsets(self, frame: u64) -> [i32; 2] {
        match self {
            DiagonalBias::Left => [-1, 1],
            DiagonalBias::Right => [1, -1],
            DiagonalBias::Alternate => {
                if frame & 1 == 0 {
                    [-1, 1]
                } else {
                    [1, -1]
                }
            }
        }
    }
}

impl FromStr for DiagonalBias {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(DiagonalBias::Left),
            "right" => Ok(DiagonalBias::Right),
            "alternate" => Ok(DiagonalBias::Alternate),
            other => Err(GridError::InvalidConfig(format!("unknown diagonal bias '{other}'"))),
        }
    }
}

/// What happens to a particle that would fall below the last row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FloorMode {
    /// The bottom row is a floor; particles settle on it.
    #[default]
    Solid,
    /// Particles leave the grid and are removed.
    Open,
}

impl FromStr for FloorMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solid" => Ok(FloorMode::Solid),
            "open" => Ok(FloorMode::Open),
            other => Err(GridError::InvalidConfig(format!("unknown floor mode '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: u32,
    pub diagonal_bias: DiagonalBias,
    pub floor: FloorMode,
    pub chunk_sleeping: bool,
    pub tick_interval_ms: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_CANVAS_HEIGHT / DEFAULT_CELL_SIZE,
            cols: DEFAULT_CANVAS_WIDTH / DEFAULT_CELL_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            diagonal_bias: DiagonalBias::Left,
            floor: FloorMode::Solid,
            chunk_sleeping: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GridConfig {
    /// Default settings with an explicit extent.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Extent derived from a canvas size in pixels, rounding partial cells down.
    pub fn from_canvas(width_px: u32, height_px: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(GridError::InvalidConfig("cellSize must be > 0".into()));
        }
        let config = Self {
            rows: height_px / cell_size,
            cols: width_px / cell_size,
            cell_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(GridError::InvalidConfig(format!(
                "grid {}x{} exceeds the {MAX_DIMENSION} cell limit per axis",
                self.rows, self.cols
            )));
        }
        if self.cell_size == 0 {
            return Err(GridError::InvalidConfig("cellSize must be > 0".into()));
        }
        if !self.tick_interval_ms.is_finite() || self.tick_interval_ms <= 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "tickIntervalMs must be a positive number, got {}",
                self.tick_interval_ms
            )));
        }
        Ok(())
    }
}
