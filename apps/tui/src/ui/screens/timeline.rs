use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::scene::render_viz_panel;
use crate::ui::{render_header, render_hints, render_status, screen_layout};
use crate::viz::ContainerId;

pub fn render_timeline(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let title = app.timeline_events.as_ref().map_or_else(
        || "Strategy timeline".to_string(),
        |events| format!("Strategy timeline ({} events)", events.len()),
    );
    render_viz_panel(app, f, content, ContainerId::StrategyTimeline, &title);

    render_status(app, f, status);
    render_hints(
        f,
        hints,
        &[("Mouse", "Hover events"), ("Esc", "Back"), ("q", "Quit")],
    );
}
