use super::*;

impl ChunkGrid {
    // === Frame update ===

    /// Called at the start of each tick: the wake set gathered since the
    /// previous tick becomes the awake set.
    pub fn begin_frame(&mut self) {
        std::mem::swap(&mut self.awake, &mut self.wake_next);
        self.wake_next.fill(false);
        self.awake_this_frame = self.awake.iter().filter(|&&a| a).count();
    }

    /// Record a change at cell `(row, col)`.
    ///
    /// The particles whose next move can depend on that cell sit at rows
    /// `row - 1 ..= row` and cols `col - 1 ..= col + 1`. Their chunks wake
    /// for the rest of this tick and for the next one.
    pub fn wake_around(&mut self, row: u32, col: u32) {
        if self.chunk_count == 0 {
            return;
        }
        let row_lo = row.saturating_sub(1);
        let row_hi = row.min(self.rows - 1);
        let col_lo = col.saturating_sub(1);
        let col_hi = (col + 1).min(self.cols - 1);

        for cy in (row_lo / CHUNK_SIZE)..=(row_hi / CHUNK_SIZE) {
            for cx in (col_lo / CHUNK_SIZE)..=(col_hi / CHUNK_SIZE) {
                let idx = (cy * self.chunks_x + cx) as usize;
                self.awake[idx] = true;
                self.wake_next[idx] = true;
            }
        }
    }

    /// Force a full scan on the next tick.
    pub fn mark_all_awake(&mut self) {
        self.awake.fill(true);
        self.wake_next.fill(true);
    }

    /// Enable/disable sleeping. Turning it back on rescans everything once.
    pub fn set_sleeping_enabled(&mut self, enabled: bool) {
        self.sleeping_enabled = enabled;
        self.mark_all_awake();
    }
}
