//! Theme coverage heatmap renderer.

use ratatui::style::Color;

use crate::api::models::HeatmapData;
use crate::viz::scale::{BandScale, SequentialBlues};
use crate::viz::surface::{Anchor, DrawingSurface, Label};
use crate::viz::Dimensions;

const BAND_PADDING: f64 = 0.05;
const AXIS_COLOR: Color = Color::Gray;
const TICK_ROTATION: f64 = -45.0;

const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 100.0;
const MARGIN_LEFT: f64 = 100.0;

pub fn theme_scale(data: &HeatmapData, dims: Dimensions) -> BandScale {
    BandScale::new(
        data.themes.iter().cloned(),
        (MARGIN_LEFT, dims.width - MARGIN_RIGHT),
        BAND_PADDING,
    )
}

pub fn country_scale(data: &HeatmapData, dims: Dimensions) -> BandScale {
    BandScale::new(
        data.countries.iter().cloned(),
        (MARGIN_TOP, dims.height - MARGIN_BOTTOM),
        BAND_PADDING,
    )
}

/// Draws the heatmap: one rect per cell, colored by the sequential blue
/// scale over `[0, 1]`, with rotated theme ticks below and country ticks
/// on the left. Cells naming a theme or country outside the supplied
/// domains are skipped.
pub fn render(surface: &mut impl DrawingSurface, data: &HeatmapData, dims: Dimensions) {
    surface.clear();

    let x_scale = theme_scale(data, dims);
    let y_scale = country_scale(data, dims);
    let colors = SequentialBlues;

    for cell in &data.data {
        let (Some(x), Some(y)) = (x_scale.position(&cell.theme), y_scale.position(&cell.country))
        else {
            continue;
        };
        surface.rect(
            x,
            y,
            x_scale.bandwidth(),
            y_scale.bandwidth(),
            colors.color(cell.value),
        );
    }

    let axis_y = dims.height - MARGIN_BOTTOM;
    for theme in x_scale.domain().to_vec() {
        if let Some(position) = x_scale.position(&theme) {
            surface.text(Label {
                x: position + x_scale.bandwidth() / 2.0,
                y: axis_y + 12.0,
                text: theme,
                anchor: Anchor::End,
                rotation: TICK_ROTATION,
                color: AXIS_COLOR,
            });
        }
    }

    for country in y_scale.domain().to_vec() {
        if let Some(position) = y_scale.position(&country) {
            surface.text(Label {
                x: MARGIN_LEFT - 4.0,
                y: position + y_scale.bandwidth() / 2.0,
                text: country,
                anchor: Anchor::End,
                rotation: 0.0,
                color: AXIS_COLOR,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::HeatmapCell;
    use crate::viz::surface::{Scene, Shape};

    fn cell(theme: &str, country: &str, value: f64) -> HeatmapCell {
        HeatmapCell {
            theme: theme.to_string(),
            country: country.to_string(),
            value,
        }
    }

    fn sample() -> HeatmapData {
        HeatmapData {
            data: vec![
                cell("Skills", "Kenya", 0.0),
                cell("Skills", "Nigeria", 0.5),
                cell("Innovation", "Kenya", 1.0),
            ],
            themes: vec!["Skills".into(), "Innovation".into()],
            countries: vec!["Kenya".into(), "Nigeria".into()],
        }
    }

    fn dims() -> Dimensions {
        Dimensions::new(800.0, 400.0)
    }

    #[test]
    fn one_rect_per_cell() {
        let mut scene = Scene::new(800.0, 400.0);
        render(&mut scene, &sample(), dims());
        assert_eq!(scene.rects().count(), 3);
    }

    #[test]
    fn zero_is_lightest_and_one_is_darkest() {
        let mut scene = Scene::new(800.0, 400.0);
        render(&mut scene, &sample(), dims());
        let fills: Vec<Color> = scene
            .rects()
            .filter_map(|shape| match shape {
                Shape::Rect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills[0], Color::Rgb(247, 251, 255));
        assert_eq!(fills[2], Color::Rgb(8, 48, 107));
    }

    #[test]
    fn theme_ticks_are_rotated() {
        let mut scene = Scene::new(800.0, 400.0);
        render(&mut scene, &sample(), dims());
        let rotated = scene
            .labels()
            .iter()
            .filter(|label| (label.rotation - TICK_ROTATION).abs() < f64::EPSILON)
            .count();
        assert_eq!(rotated, 2);
    }

    #[test]
    fn cells_outside_the_domains_are_skipped() {
        let mut data = sample();
        data.data.push(cell("Ethics", "Kenya", 0.3));
        let mut scene = Scene::new(800.0, 400.0);
        render(&mut scene, &data, dims());
        assert_eq!(scene.rects().count(), 3);
    }
}
