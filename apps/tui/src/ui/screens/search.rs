use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::actions::MIN_QUERY_LEN;
use crate::app::App;
use crate::ui::widgets::tables::search_results_table;
use crate::ui::{render_header, render_hints, render_status, screen_layout};

pub fn render_search(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(content);

    let blink = (app.animation_counter * 2.0).sin() > 0.0;
    let cursor = if blink { "█" } else { " " };
    let input_line = TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::styled(
            format!("{}{cursor}", app.search_input),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let input = Paragraph::new(input_line).block(
        Block::default()
            .title("Search strategies")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(input, split[0]);

    if app.search_input.trim().chars().count() < MIN_QUERY_LEN {
        let paragraph = Paragraph::new("Type at least 2 characters to search")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title("Results")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(paragraph, split[1]);
    } else if app.search_results.is_empty() {
        let paragraph = Paragraph::new("No results found")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title("Results")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(paragraph, split[1]);
    } else {
        f.render_widget(
            search_results_table(&app.search_results, app.selected_result_index),
            split[1],
        );
    }

    render_status(app, f, status);
    render_hints(
        f,
        hints,
        &[
            ("Type", "Search"),
            ("↑/↓", "Select result"),
            ("Enter", "Open country"),
            ("Esc", "Clear / back"),
        ],
    );
}
