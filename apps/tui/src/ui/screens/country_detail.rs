use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::scene::render_viz_panel;
use crate::ui::{render_header, render_hints, render_status, screen_layout};
use crate::viz::ContainerId;

pub fn render_country_detail(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let title = app.detail_country.as_ref().map_or_else(
        || "Strategy map".to_string(),
        |country| format!("Strategy map: {} ({})", country.name, country.status.label()),
    );
    render_viz_panel(app, f, content, ContainerId::CountryMindMap, &title);

    render_status(app, f, status);
    render_hints(
        f,
        hints,
        &[
            ("Mouse", "Hover nodes"),
            ("Esc", "Back"),
            ("e", "Export"),
            ("q", "Quit"),
        ],
    );
}
