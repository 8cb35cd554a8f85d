use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::scene::render_viz_panel;
use crate::ui::{render_header, render_hints, render_status, screen_layout};
use crate::viz::ContainerId;

pub fn render_network(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let title = app
        .registry
        .handle(ContainerId::ThemeNetwork)
        .and_then(|handle| handle.simulation.as_ref())
        .map_or_else(
            || "Country / theme network".to_string(),
            |sim| {
                if sim.running() {
                    format!(
                        "Country / theme network ({} nodes, settling)",
                        sim.nodes().len()
                    )
                } else {
                    format!("Country / theme network ({} nodes)", sim.nodes().len())
                }
            },
        );
    render_viz_panel(app, f, content, ContainerId::ThemeNetwork, &title);

    render_status(app, f, status);
    render_hints(
        f,
        hints,
        &[
            ("Mouse", "Hover"),
            ("Drag", "Pin node"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
    );
}
