use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::api::models::{SearchHit, ThemeSummary};
use crate::app::App;

/// Country browser table with the comparison selection in its own column.
pub fn country_table(app: &App) -> Table<'_> {
    let header = Row::new(vec![
        Cell::from("Code"),
        Cell::from("Country"),
        Cell::from("Status"),
        Cell::from("Compare"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.countries.iter().enumerate().map(|(index, country)| {
        let is_selected = index == app.selected_country_index;
        let marked = app.compare_selection.contains(&country.code);
        let style = if is_selected {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Row::new(vec![
            Cell::from(country.code.clone()),
            Cell::from(country.name.clone()),
            Cell::from(country.status.label())
                .style(Style::default().fg(country.status.color())),
            Cell::from(if marked { "[x]" } else { "[ ]" }),
        ])
        .style(style)
    });

    Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(24),
            Constraint::Length(16),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(
                "Countries ({} of {})",
                (app.selected_country_index + 1).min(app.countries.len()),
                app.countries.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .column_spacing(1)
}

pub fn search_results_table<'a>(results: &'a [SearchHit], selected: usize) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from("Country"),
        Cell::from("Code"),
        Cell::from("Relevance"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = results.iter().enumerate().map(|(index, hit)| {
        let style = if index == selected {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new(vec![
            Cell::from(hit.country_name.clone()),
            Cell::from(hit.country_code.clone()),
            Cell::from(format!("{} matches", hit.relevance)),
        ])
        .style(style)
    });

    Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(6),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("Results")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .column_spacing(1)
}

/// Theme frequency bars, one line per theme.
pub fn theme_bar_lines(themes: &[ThemeSummary], width: u16) -> Vec<TextLine<'static>> {
    let bar_width = usize::from(width.saturating_sub(26)).max(4);
    let max_frequency = themes.iter().map(|t| t.frequency).max().unwrap_or(1).max(1);

    themes
        .iter()
        .map(|theme| {
            let ratio = f64::from(theme.frequency) / f64::from(max_frequency);
            let fill = ((ratio * bar_width as f64).round() as usize).clamp(1, bar_width);
            let empty = bar_width - fill;
            let bar = format!("{}{}", "█".repeat(fill), "░".repeat(empty));

            TextLine::from(vec![
                Span::styled(
                    format!("{:<18.18}", theme.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::raw(format!("  {} ({:.0}%)", theme.frequency, theme.percentage)),
            ])
        })
        .collect()
}
