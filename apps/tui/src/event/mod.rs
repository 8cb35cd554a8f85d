// Event loop handling for the TUI and the headless path.

mod loop_handler;

pub use loop_handler::{run, run_headless};
