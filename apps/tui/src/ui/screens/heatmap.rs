use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::scene::render_viz_panel;
use crate::ui::{render_header, render_hints, render_status, screen_layout};
use crate::viz::ContainerId;

pub fn render_heatmap(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let title = app.heatmap.as_ref().map_or_else(
        || "Theme coverage".to_string(),
        |heatmap| {
            format!(
                "Theme coverage ({} countries x {} themes)",
                heatmap.countries.len(),
                heatmap.themes.len()
            )
        },
    );
    render_viz_panel(app, f, content, ContainerId::CoverageHeatmap, &title);

    render_status(app, f, status);
    render_hints(
        f,
        hints,
        &[("Mouse", "Hover cells"), ("Esc", "Back"), ("q", "Quit")],
    );
}
