// Terminal lifecycle management.

mod setup;

pub use setup::{cleanup, setup};
