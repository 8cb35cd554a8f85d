// Export our modules for use in the binary and tests
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod export;
pub mod terminal;
pub mod ui;
pub mod viz;

pub use domain::{NodeKind, StrategyStatus};
