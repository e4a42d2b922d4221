//! Chunk System - fixed-size chunk grid for skipping settled regions.
//!
//! A chunk is awake for a tick when any cell that could influence one of
//! its particles changed since the chunk was last scanned. Asleep chunks
//! are skipped by the tick; every particle in them is known to be settled,
//! so skipping never changes the result.

mod lifecycle;

/// Chunk edge in cells (32x32 is cache-friendly)
pub const CHUNK_SIZE: u32 = 32;

pub struct ChunkGrid {
    chunks_x: u32,
    chunks_y: u32,
    chunk_count: usize,
    rows: u32,
    cols: u32,

    // Awake during the tick in progress
    awake: Vec<bool>,
    // Awake for the next tick
    wake_next: Vec<bool>,
    awake_this_frame: usize,
    sleeping_enabled: bool,
}

impl ChunkGrid {
    /// Create chunk grid covering a `rows x cols` cell grid
    pub fn new(rows: u32, cols: u32) -> Self {
        let chunks_x = cols.div_ceil(CHUNK_SIZE);
        let chunks_y = rows.div_ceil(CHUNK_SIZE);
        let chunk_count = (chunks_x * chunks_y) as usize;

        Self {
            chunks_x,
            chunks_y,
            chunk_count,
            rows,
            cols,
            awake: vec![true; chunk_count],
            wake_next: vec![true; chunk_count],
            awake_this_frame: chunk_count,
            sleeping_enabled: true,
        }
    }

    /// Chunk columns and rows.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.chunks_x, self.chunks_y)
    }

    pub fn total_chunks(&self) -> usize {
        self.chunk_count
    }

    /// Chunks eligible for scanning when the current tick began.
    pub fn active_chunk_count(&self) -> usize {
        if self.sleeping_enabled {
            self.awake_this_frame
        } else {
            self.chunk_count
        }
    }

    pub fn sleeping_enabled(&self) -> bool {
        self.sleeping_enabled
    }

    /// Whether the tick should scan chunk `(cx, cy)` right now.
    #[inline]
    pub fn is_awake(&self, cx: u32, cy: u32) -> bool {
        !self.sleeping_enabled || self.awake[(cy * self.chunks_x + cx) as usize]
    }
}
