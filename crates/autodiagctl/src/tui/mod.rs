//! TUI - single-page diagnosis screen
//!
//! - event_loop: terminal lifecycle, key handling, async dispatch
//! - render: phase-driven drawing (form, loading, results, error)

mod event_loop;
mod render;

pub use event_loop::{run, TuiMessage};
