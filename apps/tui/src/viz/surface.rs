//! Drawing surface abstraction.
//!
//! Renderers emit primitive shapes through [`DrawingSurface`] instead of
//! touching the terminal. A [`Scene`] records the shapes; the widget layer
//! paints a scene onto a ratatui canvas, and tests assert on the recorded
//! shapes directly.

use ratatui::style::Color;

/// Horizontal anchoring of a text label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    /// Rotation in degrees, counter-clockwise. The terminal painter cannot
    /// rotate glyphs and ignores it; the value is part of the scene so the
    /// layout stays faithful for other backends.
    pub rotation: f64,
    pub color: Color,
}

/// Capability interface every renderer variant draws through.
pub trait DrawingSurface {
    fn clear(&mut self);
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn text(&mut self, label: Label);
}

/// A recorded scene in abstract surface units. The y axis grows downward,
/// matching the layout math; painters flip as needed.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    shapes: Vec<Shape>,
    labels: Vec<Label>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn circles(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { .. }))
    }

    /// Index of the circle nearest to `(x, y)` within its radius plus
    /// `slop`, counted among circles only. Used for hover hit-testing.
    pub fn circle_at(&self, x: f64, y: f64, slop: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, shape) in self.circles().enumerate() {
            let Shape::Circle {
                x: cx,
                y: cy,
                radius,
                ..
            } = shape
            else {
                continue;
            };
            let distance = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            if distance <= radius + slop && best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Index of the rect containing `(x, y)`, counted among rects only.
    pub fn rect_at(&self, x: f64, y: f64) -> Option<usize> {
        self.rects().position(|shape| {
            let Shape::Rect {
                x: rx,
                y: ry,
                width,
                height,
                ..
            } = shape
            else {
                return false;
            };
            x >= *rx && x <= rx + width && y >= *ry && y <= ry + height
        })
    }
}

impl DrawingSurface for Scene {
    fn clear(&mut self) {
        self.shapes.clear();
        self.labels.clear();
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.shapes.push(Shape::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.shapes.push(Shape::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.shapes.push(Shape::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn text(&mut self, label: Label) {
        self.labels.push(label);
    }
}

/// Parses a `#rrggbb` hex string into a color.
pub fn hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_all_recorded_content() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.circle(1.0, 1.0, 2.0, Color::Red);
        scene.text(Label {
            x: 0.0,
            y: 0.0,
            text: "a".into(),
            anchor: Anchor::Start,
            rotation: 0.0,
            color: Color::White,
        });
        scene.clear();
        assert!(scene.shapes().is_empty());
        assert!(scene.labels().is_empty());
    }

    #[test]
    fn circle_hit_test_picks_nearest() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.circle(10.0, 10.0, 3.0, Color::Red);
        scene.circle(20.0, 10.0, 3.0, Color::Blue);
        assert_eq!(scene.circle_at(19.0, 10.0, 1.0), Some(1));
        assert_eq!(scene.circle_at(50.0, 50.0, 1.0), None);
    }

    #[test]
    fn hex_color_parses_rgb() {
        assert_eq!(hex_color("#69b3a2"), Some(Color::Rgb(105, 179, 162)));
        assert_eq!(hex_color("69b3a2"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }
}
