//! Core types shared by every layer: cell states, configuration, errors
//! and the console logger.

pub mod cell;
pub mod config;
pub mod error;
pub mod logging;
