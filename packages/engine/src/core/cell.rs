//! Cell - the state held by one lattice position.
//!
//! Stored as `#[repr(u8)]` so the cell buffer can be handed to JS as a
//! plain byte view. Positions outside the grid are never stored; lookups
//! for them return `None` and the fall rule treats them as walls.

use serde::{Deserialize, Serialize};

/// Byte reported to JS for a coordinate outside the grid.
pub const CELL_OUT_OF_BOUNDS: u8 = u8::MAX;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cell {
    #[default]
    Empty = 0,
    Sand = 1,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_sand(self) -> bool {
        self == Cell::Sand
    }

    /// Byte value as seen through `cells_ptr`.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Byte for an optional lookup, `CELL_OUT_OF_BOUNDS` when missing.
    #[inline]
    pub fn id_or_out_of_bounds(cell: Option<Cell>) -> u8 {
        cell.map_or(CELL_OUT_OF_BOUNDS, Cell::id)
    }
}
