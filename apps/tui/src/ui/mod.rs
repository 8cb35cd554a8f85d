// UI rendering: shared chrome plus one module per screen.

pub mod screens;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, Screen};

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    // Panel areas are re-recorded each frame by the visible screen, so
    // pointer events never route into a hidden container.
    app.panel_areas.clear();

    match app.screen {
        Screen::Countries => screens::countries::render_countries(app, f),
        Screen::CountryDetail => screens::country_detail::render_country_detail(app, f),
        Screen::Network => screens::network::render_network(app, f),
        Screen::Timeline => screens::timeline::render_timeline(app, f),
        Screen::Heatmap => screens::heatmap::render_heatmap(app, f),
        Screen::Search => screens::search::render_search(app, f),
        Screen::Compare => screens::compare::render_compare(app, f),
    }

    widgets::popup::render_tooltip(app, f);

    if app.show_help {
        screens::help::render_help(f);
    }
}

/// Standard vertical split: header, content, status, shortcut hints.
pub(crate) fn screen_layout(f: &Frame<'_>) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area().inner(Margin::new(2, 1)));
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

pub(crate) fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("== AI Strategies Portal ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let titles = ["Countries", "Network", "Timeline", "Heatmap", "Search"]
        .iter()
        .map(|title| TextLine::from(*title))
        .collect::<Vec<_>>();
    let selected = match app.screen {
        Screen::Countries | Screen::CountryDetail | Screen::Compare => 0,
        Screen::Network => 1,
        Screen::Timeline => 2,
        Screen::Heatmap => 3,
        Screen::Search => 4,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, inner);
}

pub(crate) fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = app.banner.as_ref().map_or_else(
        || {
            let base = format!(
                "Portal: {} | Export format: {}",
                app.client.base_url(),
                app.export_format.label()
            );
            Text::from(Span::styled(base, Style::default().fg(Color::Gray)))
        },
        |banner| {
            let style = if banner.error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Text::from(vec![TextLine::from(vec![
                Span::styled(banner.text.clone(), style),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::Gray)),
            ])])
        },
    );

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub(crate) fn render_hints(f: &mut Frame<'_>, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (index, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        let separator = if index + 1 < hints.len() { " | " } else { "" };
        spans.push(Span::styled(
            format!(": {action}{separator}"),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(TextLine::from(spans))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}
