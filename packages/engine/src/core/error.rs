use thiserror::Error;
use wasm_bindgen::JsValue;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by the particle grid and the bridge around it.
///
/// Only `NotInitialized` and configuration errors reach JS as exceptions;
/// out-of-bounds adds are logged and dropped at the bridge.
#[derive(Debug, Error)]
pub enum GridError {
    /// Coordinate outside `[0, rows) x [0, cols)`.
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds { row: i32, col: i32, rows: u32, cols: u32 },

    /// Pixel coordinate that cannot be mapped to a cell (NaN or infinite).
    #[error("pixel coordinates ({x}, {y}) are not finite")]
    NonFinitePixel { x: f64, y: f64 },

    /// Bridge call made before `wasm_bridge_init`.
    #[error("simulation not initialized")]
    NotInitialized,

    /// Configuration values that cannot describe a grid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed configuration JSON.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl From<GridError> for JsValue {
    fn from(e: GridError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
