//! Terminal rendering using ratatui.
//!
//! One submodule per dashboard section: metric cards, trend chart, history
//! table, plus the shared header/status chrome and theming. Every render
//! function reads from the app's current snapshot and touches only its own
//! screen region, so the three views always agree and a bad value in one
//! section cannot disturb the others.

pub mod cards;
pub mod chart;
pub mod common;
pub mod table;
pub mod theme;

pub use theme::Theme;
