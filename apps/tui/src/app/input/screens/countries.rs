use crossterm::event::KeyCode;

use crate::app::actions;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;

pub fn handle_countries_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => {
            app.selected_country_index =
                wrap_decrement(app.selected_country_index, app.countries.len());
        }
        KeyCode::Down => {
            app.selected_country_index =
                wrap_increment(app.selected_country_index, app.countries.len());
        }
        KeyCode::Char(' ') => actions::toggle_compare_selection(app),
        KeyCode::Enter => {
            if let Some(country) = app.selected_country().cloned() {
                actions::open_country(app, country);
            }
        }
        KeyCode::Char('c') => actions::request_comparison(app),
        KeyCode::Esc => {
            if app.banner.is_some() {
                app.dismiss_banner();
            } else {
                app.compare_selection.clear();
            }
        }
        _ => {}
    }
}
