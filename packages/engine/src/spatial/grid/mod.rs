//! Grid - flat row-major cell storage
//!
//! One contiguous `Vec<Cell>` indexed `row * cols + col`, so the buffer can
//! be handed to JS as bytes without copying. A per-row occupancy counter
//! lets the tick and the report skip rows that hold no sand.

use crate::core::cell::Cell;

mod indexing;
mod accessors;

pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,

    pub cells: Vec<Cell>,

    // Sand cells per row; kept exact by every write path in accessors.rs
    row_counts: Vec<u32>,
    particle_count: u32,
}

impl Grid {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            size,
            cells: vec![Cell::Empty; size],
            row_counts: vec![0; rows as usize],
            particle_count: 0,
        }
    }

    /// Reset every cell to `Empty`. Memory stays allocated.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.row_counts.fill(0);
        self.particle_count = 0;
    }

    // === Occupancy bookkeeping ===
    fn mark_filled(&mut self, row: u32) {
        self.row_counts[row as usize] += 1;
        self.particle_count += 1;
    }

    fn mark_emptied(&mut self, row: u32) {
        let count = &mut self.row_counts[row as usize];
        debug_assert!(*count > 0, "row {row} emptied with no particles recorded");
        *count = count.saturating_sub(1);
        self.particle_count = self.particle_count.saturating_sub(1);
    }
}
