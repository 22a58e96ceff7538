//! Live terminal dashboard for a transcript file.

pub mod app_state;
pub mod input;
pub mod runner;
pub mod tabs;
pub mod ui;
pub mod widgets;

pub use runner::run_tui;
