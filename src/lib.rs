//! Dashcard library exports, so integration and property tests can drive
//! the core without a terminal.

pub mod core;
pub mod tui;
