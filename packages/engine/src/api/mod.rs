//! Module-level entry points for the page script.

pub mod bridge;
