//! Per-particle update rules. Sand is the only material; its rule lives in
//! `powder`.

pub mod powder;

pub use powder::{next_position, FallOutcome};
