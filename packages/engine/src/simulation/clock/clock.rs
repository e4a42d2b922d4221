use crate::core::config::DEFAULT_TICK_INTERVAL_MS;

/// Fixed-rate tick gate, independent of how often the page renders.
///
/// `due` fires on the first call and then whenever a full interval has
/// passed since the last tick. Late frames do not queue catch-up ticks.
#[derive(Clone, Debug)]
pub struct TickClock {
    interval_ms: f64,
    last_tick_ms: Option<f64>,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS)
    }
}

impl TickClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_tick_ms: None,
        }
    }

    pub fn due(&mut self, now_ms: f64) -> bool {
        match self.last_tick_ms {
            Some(last) if now_ms < last => {
                // Timestamp source restarted; re-anchor instead of stalling
                self.last_tick_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_tick_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last tick so the next `due` fires immediately.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }
}
