use crossterm::event::KeyCode;

use crate::api::models::CountrySummary;
use crate::app::actions;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Screen};
use crate::domain::StrategyStatus;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => {
            app.search_input.push(c);
            actions::queue_search(app);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            actions::queue_search(app);
        }
        KeyCode::Up => {
            app.selected_result_index =
                wrap_decrement(app.selected_result_index, app.search_results.len());
        }
        KeyCode::Down => {
            app.selected_result_index =
                wrap_increment(app.selected_result_index, app.search_results.len());
        }
        KeyCode::Enter => {
            if let Some(hit) = app.search_results.get(app.selected_result_index).cloned() {
                let country = app
                    .countries
                    .iter()
                    .find(|c| c.code == hit.country_code)
                    .cloned()
                    .unwrap_or(CountrySummary {
                        code: hit.country_code,
                        name: hit.country_name,
                        status: StrategyStatus::Unknown,
                    });
                actions::open_country(app, country);
            }
        }
        KeyCode::Esc => {
            if app.banner.is_some() {
                app.dismiss_banner();
            } else if app.search_input.is_empty() {
                app.screen = Screen::Countries;
            } else {
                app.search_input.clear();
                app.search_results.clear();
                app.selected_result_index = 0;
                app.pending_search = None;
            }
        }
        _ => {}
    }
}
