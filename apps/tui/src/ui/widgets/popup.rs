use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Rect centered in `area` covering the given percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Draws the tooltip overlay near the pointer cell, clamped inside the
/// frame. The first line is the title; the rest are detail lines.
pub fn render_tooltip(app: &App, f: &mut Frame<'_>) {
    if !app.tooltip.visible() {
        return;
    }
    let lines = app.tooltip.lines();
    if lines.is_empty() {
        return;
    }

    let frame_area = f.area();
    let content_width = lines.iter().map(String::len).max().unwrap_or(0).min(40) as u16;
    let width = (content_width + 2).min(frame_area.width);
    let height = (lines.len() as u16 + 2).min(frame_area.height);

    let (cell_x, cell_y) = app.tooltip_cell;
    let x = (cell_x + 2).min(frame_area.width.saturating_sub(width));
    let y = cell_y
        .saturating_sub(1)
        .min(frame_area.height.saturating_sub(height));
    let area = Rect {
        x,
        y,
        width,
        height,
    };

    let text: Vec<TextLine<'_>> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let style = if index == 0 {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            TextLine::from(Span::styled(line.clone(), style))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
