//! CLI command implementations.

pub mod band;
pub mod common;
pub mod filter;
pub mod info;
pub mod peaks;
pub mod plot;
pub mod prefs;
pub mod spectrum;
