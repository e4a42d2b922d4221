//! Double-buffered latest-report handoff between the tick side and the
//! render side.
//!
//! The tick side fills `back_mut()` and calls `publish()`; the render side
//! only ever reads `latest()`. `publish` is the single point where the two
//! meet, so a reader never sees a half-written report.

use super::report::ActiveParticleReport;

#[derive(Debug, Default)]
pub struct SnapshotBuffer {
    buffers: [ActiveParticleReport; 2],
    front: usize,
    published: u64,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer the next report is written into. Holds stale data until filled.
    pub fn back_mut(&mut self) -> &mut ActiveParticleReport {
        &mut self.buffers[self.front ^ 1]
    }

    /// Make the back buffer the latest snapshot.
    pub fn publish(&mut self) {
        self.front ^= 1;
        self.published += 1;
    }

    /// Most recently published report, `None` before the first publish.
    pub fn latest(&self) -> Option<&ActiveParticleReport> {
        if self.published == 0 {
            None
        } else {
            Some(&self.buffers[self.front])
        }
    }

    pub fn publish_count(&self) -> u64 {
        self.published
    }
}
