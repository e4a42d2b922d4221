use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.rows && (col as u32) < self.cols
    }
}
