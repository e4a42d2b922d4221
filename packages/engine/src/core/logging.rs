//! Console logging for the browser build.
//!
//! Everything in the crate logs through the `log` facade. On wasm32 the
//! records go to the browser console; native builds install no logger so
//! the macros compile down to level checks.

/// Install the console logger. Repeated calls are ignored.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();
    }
}
