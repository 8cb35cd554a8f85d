use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Rectangle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::app::App;
use crate::viz::surface::{Anchor, Scene, Shape};
use crate::viz::ContainerId;

/// Surface units represented by one terminal column. Keeps the abstract
/// pixel-like coordinates of the renderers proportional to the panel.
pub const UNITS_PER_CELL: f64 = 10.0;

/// Paints a recorded scene onto a canvas filling `area`. Scene y grows
/// downward; the canvas grows upward, so y is flipped here.
pub fn render_scene(f: &mut Frame<'_>, area: Rect, scene: &Scene) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let height = scene.height;
    let units_per_col = scene.width / f64::from(area.width.max(1));

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                for shape in scene.shapes() {
                    match shape {
                        Shape::Circle {
                            x,
                            y,
                            radius,
                            color,
                        } => ctx.draw(&Circle {
                            x: *x,
                            y: height - *y,
                            radius: *radius,
                            color: *color,
                        }),
                        Shape::Line {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                            ..
                        } => ctx.draw(&CanvasLine {
                            x1: *x1,
                            y1: height - *y1,
                            x2: *x2,
                            y2: height - *y2,
                            color: *color,
                        }),
                        Shape::Rect {
                            x,
                            y,
                            width,
                            height: h,
                            color,
                        } => ctx.draw(&Rectangle {
                            x: *x,
                            y: height - (*y + *h),
                            width: *width,
                            height: *h,
                            color: *color,
                        }),
                    }
                }

                for label in scene.labels() {
                    let advance = label.text.len() as f64 * units_per_col;
                    let offset = match label.anchor {
                        Anchor::Start => 0.0,
                        Anchor::Middle => -advance / 2.0,
                        Anchor::End => -advance,
                    };
                    ctx.print(
                        label.x + offset,
                        height - label.y,
                        TextLine::styled(label.text.clone(), Style::default().fg(label.color)),
                    );
                }
            })
            .x_bounds([0.0, scene.width])
            .y_bounds([0.0, scene.height]),
        area,
    );
}

pub fn render_loading(f: &mut Frame<'_>, area: Rect, state: &mut ThrobberState) {
    let throbber = Throbber::default()
        .label("Loading portal data...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
    let line = Rect {
        x: area.x + area.width.saturating_sub(24) / 2,
        y: area.y + area.height / 2,
        width: 24.min(area.width),
        height: 1.min(area.height),
    };
    f.render_stateful_widget(throbber, line, state);
}

/// Bordered visualization panel: measures the surface for the registry,
/// records the panel area for pointer routing, and paints whatever handle
/// is registered for the container.
pub fn render_viz_panel(app: &mut App, f: &mut Frame<'_>, area: Rect, id: ContainerId, title: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 2 || inner.height < 2 {
        return;
    }

    app.registry
        .measure(id, f64::from(inner.width) * UNITS_PER_CELL);
    app.panel_areas.insert(id, inner);

    if let Some(handle) = app.registry.handle(id) {
        render_scene(f, inner, &handle.scene);
    } else if app.is_loading() || !app.in_flight.is_empty() {
        render_loading(f, inner, &mut app.throbber_state);
    } else {
        let paragraph = Paragraph::new("No data available")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
    }
}
