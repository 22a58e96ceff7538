pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod report;
pub mod swarm;
pub mod transcript;
pub mod tui;
