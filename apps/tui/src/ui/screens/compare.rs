use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::{render_header, render_hints, render_status, screen_layout};

pub fn render_compare(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let title = if app.compare_selection.is_empty() {
        "Comparison".to_string()
    } else {
        format!("Comparison: {}", app.compare_selection.join(", "))
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // The comparison payload shape belongs to the server; show it as
    // formatted JSON.
    let body = app.comparison.as_ref().map_or_else(
        || "No comparison loaded".to_string(),
        |payload| {
            serde_json::to_string_pretty(payload)
                .unwrap_or_else(|_| "Comparison payload could not be formatted".to_string())
        },
    );

    let paragraph = Paragraph::new(body)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, content);

    render_status(app, f, status);
    render_hints(f, hints, &[("Esc", "Back"), ("e", "Export"), ("q", "Quit")]);
}
