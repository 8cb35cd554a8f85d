use crossterm::event::KeyCode;

use crate::app::state::{App, Screen};

pub fn handle_compare_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Backspace => {
            if app.banner.is_some() {
                app.dismiss_banner();
            } else {
                app.screen = Screen::Countries;
            }
        }
        _ => {}
    }
}
