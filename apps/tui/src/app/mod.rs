// App module: controller state, actions, and input dispatch.

pub mod actions;
pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, AppMessage, Banner, Screen};
