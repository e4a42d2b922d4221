//! Spatial storage: the cell grid and the chunk activity map laid over it.

pub mod chunks;
pub mod grid;
