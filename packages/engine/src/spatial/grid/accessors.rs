use super::*;

impl Grid {
    // === Reads ===

    /// Cell at a signed coordinate, `None` outside the grid.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row as u32, col as u32)])
        } else {
            None
        }
    }

    /// In-bounds read; callers guarantee the coordinate is valid.
    #[inline(always)]
    pub fn get_unchecked(&self, row: u32, col: u32) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// True only for an in-bounds `Empty` cell. Outside the grid is a wall.
    #[inline]
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    #[inline]
    pub fn row_has_data(&self, row: u32) -> bool {
        self.row_counts[row as usize] > 0
    }

    #[inline]
    pub fn particle_count(&self) -> u32 { self.particle_count }

    // === Writes ===

    /// Put sand into an empty cell. Returns false if it was already occupied.
    pub fn fill(&mut self, row: u32, col: u32) -> bool {
        let idx = self.index(row, col);
        if self.cells[idx].is_sand() {
            return false;
        }
        self.cells[idx] = Cell::Sand;
        self.mark_filled(row);
        true
    }

    /// Empty an occupied cell. Returns false if it was already empty.
    pub fn clear_cell(&mut self, row: u32, col: u32) -> bool {
        let idx = self.index(row, col);
        if self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Empty;
        self.mark_emptied(row);
        true
    }

    /// Move a particle into an empty cell.
    pub fn move_particle(&mut self, from_row: u32, from_col: u32, to_row: u32, to_col: u32) {
        let from = self.index(from_row, from_col);
        let to = self.index(to_row, to_col);
        debug_assert!(self.cells[from].is_sand(), "move from empty cell ({from_row}, {from_col})");
        debug_assert!(self.cells[to].is_empty(), "move into occupied cell ({to_row}, {to_col})");
        self.cells[from] = Cell::Empty;
        self.cells[to] = Cell::Sand;
        if from_row != to_row {
            self.mark_emptied(from_row);
            self.mark_filled(to_row);
        }
    }

    // === Bulk reads ===

    /// Append every sand coordinate in row-major order.
    pub fn collect_particles(&self, out: &mut Vec<(u32, u32)>) {
        let cols = self.cols as usize;
        for row in 0..self.rows {
            if !self.row_has_data(row) {
                continue;
            }
            let start = row as usize * cols;
            let row_cells = &self.cells[start..start + cols];
            out.extend(
                row_cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_sand())
                    .map(|(col, _)| (row, col as u32)),
            );
        }
    }

    /// Raw pointer to the cell bytes (for JS rendering).
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }
}
