use crossterm::event::KeyCode;

use crate::app::state::{App, Screen};

/// Shared handler for the visualization screens; pointer interaction is
/// routed separately through the mouse path.
pub fn handle_panel_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Backspace => {
            if app.banner.is_some() {
                app.dismiss_banner();
            } else {
                app.screen = Screen::Countries;
                app.tooltip.hide();
            }
        }
        _ => {}
    }
}
