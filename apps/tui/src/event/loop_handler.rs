use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{actions, handle_input, handle_mouse, App};
use crate::domain::StrategyStatus;
use crate::ui;

/// Run the main application event loop.
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Event poll timeout (ms); also paces simulation ticks and debounce
    // checks.
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Animations and live force simulations.
        app.update();

        // Apply whatever the fetch tasks posted since the last pass.
        while let Ok(message) = app.rx.try_recv() {
            actions::apply_message(app, message);
        }

        // Debounced search and resize work.
        actions::flush_pending(app);

        // Draw fetched data whose container has no scene yet.
        actions::sync_visualizations(app);

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    handle_mouse(app, mouse);
                }
                Ok(Event::Resize(_, _)) => {
                    actions::queue_resize(app);
                }
                Ok(_) | Err(_) => {
                    // Ignore other events.
                }
            }
        }
    }
    Ok(())
}

/// Run without a UI: fetch the datasets and print a summary.
pub async fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = build_headless_stats(app).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nStrategy Portal Stats");
    println!("=====================");
    println!("Portal: {}", stats.portal);
    println!("Countries: {}", stats.total_countries);
    println!("Themes: {}", stats.total_themes);

    println!("\nCountries by status:");
    for (status, count) in &stats.by_status {
        println!("- {status}: {count}");
    }

    println!("\nTop themes:");
    for theme in &stats.top_themes {
        println!(
            "- {} | {} countries | {:.1}%",
            theme.name, theme.frequency, theme.percentage
        );
    }
}

async fn build_headless_stats(app: &App) -> Result<HeadlessStats> {
    let countries = app.client.fetch_countries().await?;
    let themes = app.client.fetch_themes().await?;

    let statuses = [
        StrategyStatus::Published,
        StrategyStatus::Draft,
        StrategyStatus::UnderDevelopment,
        StrategyStatus::Unknown,
    ];
    let by_status = statuses
        .iter()
        .map(|status| {
            let count = countries.iter().filter(|c| c.status == *status).count();
            (status.label().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    let mut top_themes: Vec<HeadlessTheme> = themes
        .iter()
        .map(|theme| HeadlessTheme {
            name: theme.name.clone(),
            frequency: theme.frequency,
            percentage: theme.percentage,
        })
        .collect();
    top_themes.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    top_themes.truncate(5);

    Ok(HeadlessStats {
        portal: app.client.base_url().to_string(),
        total_countries: countries.len(),
        total_themes: themes.len(),
        by_status,
        top_themes,
    })
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    portal: String,
    total_countries: usize,
    total_themes: usize,
    by_status: Vec<(String, usize)>,
    top_themes: Vec<HeadlessTheme>,
}

#[derive(serde::Serialize)]
struct HeadlessTheme {
    name: String,
    frequency: u32,
    percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_stats_serialize_to_json() {
        let stats = HeadlessStats {
            portal: "http://127.0.0.1:5000".to_string(),
            total_countries: 8,
            total_themes: 8,
            by_status: vec![("Published".to_string(), 5)],
            top_themes: vec![HeadlessTheme {
                name: "Skills Development".to_string(),
                frequency: 8,
                percentage: 100.0,
            }],
        };
        let json = serde_json::to_string_pretty(&stats).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["total_countries"], 8);
        assert_eq!(value["top_themes"][0]["name"], "Skills Development");
    }
}
