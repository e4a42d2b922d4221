//! Millisecond clock shared by the step timer and the frame loop.

#[cfg(not(target_arch = "wasm32"))]
use std::{sync::OnceLock, time::Instant};

#[cfg(not(target_arch = "wasm32"))]
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Milliseconds on a clock that only moves forward within one run.
/// Browser builds read `Date.now()`; native builds count from first use.
pub(crate) fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_runs_backwards() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
        assert!(PerfTimer::start().elapsed_ms() >= 0.0);
    }
}
