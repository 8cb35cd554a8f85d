use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::scene::render_loading;
use crate::ui::widgets::tables::{country_table, theme_bar_lines};
use crate::ui::{render_header, render_hints, render_status, screen_layout};

pub fn render_countries(app: &mut App, f: &mut Frame<'_>) {
    let (header, content, status, hints) = screen_layout(f);
    render_header(app, f, header);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(content);

    if app.countries.is_empty() {
        let block = Block::default()
            .title("Countries")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(split[0]);
        f.render_widget(block, split[0]);
        if app.is_loading() {
            render_loading(f, inner, &mut app.throbber_state);
        } else {
            let paragraph = Paragraph::new("No countries available")
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, inner);
        }
    } else {
        f.render_widget(country_table(app), split[0]);
    }

    let themes_block = Block::default()
        .title(format!("Themes ({})", app.themes.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let themes_inner = themes_block.inner(split[1]);
    f.render_widget(themes_block, split[1]);

    if app.themes.is_empty() {
        let paragraph = Paragraph::new("No themes available")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, themes_inner);
    } else {
        let lines = theme_bar_lines(&app.themes, themes_inner.width);
        let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        f.render_widget(paragraph, themes_inner);
    }

    render_status(app, f, status);
    render_hints(
        f,
        hints,
        &[
            ("↑/↓", "Select"),
            ("Enter", "Open country"),
            ("Space", "Mark for compare"),
            ("c", "Compare"),
            ("s", "Search"),
            ("2-4", "Charts"),
            ("e", "Export"),
            ("f", "Format"),
            ("q", "Quit"),
        ],
    );
}
