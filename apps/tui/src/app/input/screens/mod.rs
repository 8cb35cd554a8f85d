use crossterm::event::KeyCode;

use crate::app::actions;
use crate::app::state::{App, Screen};

mod compare;
mod countries;
mod panels;
mod search;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    if key == KeyCode::F(1) {
        app.show_help = true;
        return;
    }

    // Global shortcuts, inactive while the search box owns the keyboard.
    if app.screen != Screen::Search {
        match key {
            KeyCode::Char('?') => {
                app.show_help = true;
                return;
            }
            KeyCode::Char('q') => {
                app.running = false;
                return;
            }
            KeyCode::Char('1') => {
                app.screen = Screen::Countries;
                app.tooltip.hide();
                return;
            }
            KeyCode::Char('2') => {
                actions::show_network(app);
                return;
            }
            KeyCode::Char('3') => {
                actions::show_timeline(app);
                return;
            }
            KeyCode::Char('4') => {
                actions::show_heatmap(app);
                return;
            }
            KeyCode::Char('s' | '/') => {
                app.screen = Screen::Search;
                app.tooltip.hide();
                return;
            }
            KeyCode::Char('e') => {
                actions::export_dataset(app);
                return;
            }
            KeyCode::Char('f') => {
                app.export_format = app.export_format.toggled();
                let label = app.export_format.label();
                app.set_status(format!("Export format: {label}"));
                return;
            }
            _ => {}
        }
    }

    match app.screen {
        Screen::Countries => countries::handle_countries_input(app, key),
        Screen::CountryDetail | Screen::Network | Screen::Timeline | Screen::Heatmap => {
            panels::handle_panel_input(app, key);
        }
        Screen::Search => search::handle_search_input(app, key),
        Screen::Compare => compare::handle_compare_input(app, key),
    }
}
