use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::popup::centered_rect;

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());

    let block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = |k: &'static str, action: &'static str| {
        TextLine::from(vec![
            Span::styled(
                format!("  {k}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {action}"), Style::default()),
        ])
    };

    let lines = vec![
        TextLine::from(Span::styled(
            "AI Strategies Portal",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Browse national AI strategies, compare countries, and explore"),
        TextLine::from("the portal's visualizations from the terminal."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Screens:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key("1", "Country browser"),
        key("2", "Country / theme network graph"),
        key("3", "Publication timeline"),
        key("4", "Theme coverage heatmap"),
        key("s or /", "Search"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Actions:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key("Enter", "Open the selected country's strategy map"),
        key("Space", "Mark/unmark a country for comparison"),
        key("c", "Compare the marked countries (at least 2)"),
        key("e", "Export the dataset (JSON or CSV)"),
        key("f", "Toggle the export format"),
        key("Esc", "Dismiss banner / go back"),
        key("q", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Mouse:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from("  Hover chart elements for details; drag network nodes to pin"),
        TextLine::from("  them while the layout settles."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
