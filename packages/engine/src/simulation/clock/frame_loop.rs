use crate::core::config::GridConfig;
use crate::core::error::Result;

use super::clock::TickClock;
use super::perf_timer::now_ms;
use super::report::ActiveParticleReport;
use super::snapshot::SnapshotBuffer;
use super::GridCore;

/// Grid + tick clock + snapshot buffer: what one animation-frame callback
/// needs. Ticks run at the configured rate; every frame reads the latest
/// published snapshot.
pub struct FrameLoop {
    core: GridCore,
    clock: TickClock,
    snapshots: SnapshotBuffer,
}

impl FrameLoop {
    pub fn new(core: GridCore) -> Self {
        let clock = TickClock::new(core.config().tick_interval_ms);
        let mut snapshots = SnapshotBuffer::new();
        core.fill_report(snapshots.back_mut());
        snapshots.publish();
        Self { core, clock, snapshots }
    }

    pub fn with_config(config: GridConfig) -> Result<Self> {
        Ok(Self::new(GridCore::with_config(config)?))
    }

    pub fn core(&self) -> &GridCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut GridCore {
        &mut self.core
    }

    /// Tick if the clock says so, publishing the new report. Returns whether
    /// a tick ran.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if !self.clock.due(now_ms) {
            return false;
        }
        self.core.step();
        self.core.fill_report(self.snapshots.back_mut());
        self.snapshots.publish();
        true
    }

    /// `advance` on the engine's own millisecond clock, for hosts that do
    /// not pass frame timestamps.
    pub fn advance_now(&mut self) -> bool {
        self.advance(now_ms())
    }

    /// Empty the grid and publish the empty report. The next frame ticks
    /// straight away instead of waiting out the old interval.
    pub fn clear(&mut self) {
        self.core.clear();
        self.clock.reset();
        self.refresh();
    }

    /// Republish without ticking, e.g. after adds between ticks.
    pub fn refresh(&mut self) {
        self.core.fill_report(self.snapshots.back_mut());
        self.snapshots.publish();
    }

    pub fn latest(&self) -> Option<&ActiveParticleReport> {
        self.snapshots.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_loop() -> FrameLoop {
        let mut config = GridConfig::new(10, 10);
        config.tick_interval_ms = 10.0;
        FrameLoop::with_config(config).expect("valid config")
    }

    #[test]
    fn starts_with_an_empty_published_snapshot() {
        let frame_loop = frame_loop();
        let latest = frame_loop.latest().expect("initial snapshot");
        assert!(latest.is_empty());
        assert_eq!((latest.rows, latest.cols), (10, 10));
    }

    #[test]
    fn renders_between_ticks_see_the_last_tick() {
        let mut frame_loop = frame_loop();
        frame_loop.core_mut().add_sand(0, 5).expect("in bounds");

        assert!(frame_loop.advance(0.0));
        assert_eq!(frame_loop.latest().map(|r| r.active_particles.clone()), Some(vec![(1, 5)]));

        // Two renders inside one interval: no tick, same snapshot
        assert!(!frame_loop.advance(4.0));
        assert!(!frame_loop.advance(8.0));
        assert_eq!(frame_loop.latest().map(|r| r.frame), Some(1));

        assert!(frame_loop.advance(10.0));
        assert_eq!(frame_loop.latest().map(|r| r.active_particles.clone()), Some(vec![(2, 5)]));
    }

    #[test]
    fn clear_publishes_empty_grid_and_ticks_next_frame() {
        let mut frame_loop = frame_loop();
        frame_loop.core_mut().add_sand(0, 5).expect("in bounds");
        assert!(frame_loop.advance(100.0));

        frame_loop.clear();
        let latest = frame_loop.latest().expect("published");
        assert!(latest.is_empty());
        assert_eq!(latest.frame, 0);

        // Only 1ms after the last tick, but the clock was reset
        frame_loop.core_mut().add_sand(0, 2).expect("in bounds");
        assert!(frame_loop.advance(101.0));
        assert_eq!(frame_loop.latest().map(|r| r.active_particles.clone()), Some(vec![(1, 2)]));
    }

    #[test]
    fn own_clock_ticks_once_per_interval() {
        let mut config = GridConfig::new(10, 10);
        config.tick_interval_ms = 1.0e9;
        let mut frame_loop = FrameLoop::with_config(config).expect("valid config");
        frame_loop.core_mut().add_sand(0, 0).expect("in bounds");
        assert!(frame_loop.advance_now());
        assert!(!frame_loop.advance_now());
        assert_eq!(frame_loop.latest().map(|r| r.frame), Some(1));
    }

    #[test]
    fn adds_between_ticks_show_after_refresh() {
        let mut frame_loop = frame_loop();
        frame_loop.core_mut().add_sand(3, 3).expect("in bounds");
        assert!(frame_loop.latest().is_some_and(|r| r.is_empty()));
        frame_loop.refresh();
        assert_eq!(frame_loop.latest().map(|r| r.len()), Some(1));
    }
}
