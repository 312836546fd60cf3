//! AutoDiag control - CLI and TUI front ends over the diagnosis client.

pub mod commands;
pub mod form;
pub mod output;
pub mod session;
pub mod tui;
