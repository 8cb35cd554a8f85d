//! Timeline renderer for strategy publication events.

use chrono::NaiveDate;
use ratatui::style::Color;

use crate::api::models::TimelineEvent;
use crate::viz::scale::{BandScale, TimeScale};
use crate::viz::surface::{hex_color, Anchor, DrawingSurface, Label};
use crate::viz::Dimensions;

pub const EVENT_RADIUS: f64 = 6.0;
const DEFAULT_EVENT_COLOR: Color = Color::Rgb(105, 179, 162);
const AXIS_COLOR: Color = Color::Gray;
const BAND_PADDING: f64 = 0.1;
const X_TICKS: usize = 5;

const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;

/// An event with its parsed date; the wire model keeps the raw string.
#[derive(Debug, Clone)]
pub struct DatedEvent<'a> {
    pub event: &'a TimelineEvent,
    pub date: NaiveDate,
}

/// Parses event dates (`YYYY-MM-DD`), silently skipping malformed ones.
pub fn dated_events(events: &[TimelineEvent]) -> Vec<DatedEvent<'_>> {
    events
        .iter()
        .filter_map(|event| {
            let date = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").ok()?;
            Some(DatedEvent { event, date })
        })
        .collect()
}

pub fn time_scale(dated: &[DatedEvent<'_>], dims: Dimensions) -> Option<TimeScale> {
    let dates: Vec<NaiveDate> = dated.iter().map(|d| d.date).collect();
    TimeScale::from_extent(&dates, (MARGIN_LEFT, dims.width - MARGIN_RIGHT))
}

pub fn country_scale(dated: &[DatedEvent<'_>], dims: Dimensions) -> BandScale {
    BandScale::new(
        dated.iter().map(|d| d.event.country.clone()),
        (MARGIN_TOP, dims.height - MARGIN_BOTTOM),
        BAND_PADDING,
    )
}

/// Draws the timeline: bottom time axis, left country axis, and one
/// fixed-radius point per event at the center of its country band.
pub fn render(surface: &mut impl DrawingSurface, events: &[TimelineEvent], dims: Dimensions) {
    surface.clear();

    let dated = dated_events(events);
    let Some(x_scale) = time_scale(&dated, dims) else {
        return;
    };
    let y_scale = country_scale(&dated, dims);

    let axis_y = dims.height - MARGIN_BOTTOM;
    surface.line(
        MARGIN_LEFT,
        axis_y,
        dims.width - MARGIN_RIGHT,
        axis_y,
        1.0,
        AXIS_COLOR,
    );
    surface.line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, axis_y, 1.0, AXIS_COLOR);

    for tick in x_scale.ticks(X_TICKS) {
        surface.text(Label {
            x: x_scale.position(tick),
            y: axis_y + 12.0,
            text: tick.format("%Y-%m-%d").to_string(),
            anchor: Anchor::Middle,
            rotation: 0.0,
            color: AXIS_COLOR,
        });
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

    for entry in &dated {
        let Some(band) = y_scale.position(&entry.event.country) else {
            continue;
        };
        let color = entry
            .event
            .color
            .as_deref()
            .and_then(hex_color)
            .unwrap_or(DEFAULT_EVENT_COLOR);
        surface.circle(
            x_scale.position(entry.date),
            band + y_scale.bandwidth() / 2.0,
            EVENT_RADIUS,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::surface::{Scene, Shape};

    fn event(country: &str, date: &str) -> TimelineEvent {
        TimelineEvent {
            country: country.to_string(),
            date: date.to_string(),
            color: None,
            description: None,
        }
    }

    fn dims() -> Dimensions {
        Dimensions::new(800.0, 500.0)
    }

    #[test]
    fn x_domain_is_the_date_extent() {
        let events = vec![event("A", "2020-01-01"), event("B", "2021-06-15")];
        let dated = dated_events(&events);
        let scale = time_scale(&dated, dims()).expect("dates present");
        let (start, end) = scale.domain();
        assert_eq!(start.to_string(), "2020-01-01");
        assert_eq!(end.to_string(), "2021-06-15");
    }

    #[test]
    fn y_domain_is_the_distinct_countries() {
        let events = vec![
            event("A", "2020-01-01"),
            event("B", "2021-06-15"),
            event("A", "2020-05-05"),
        ];
        let dated = dated_events(&events);
        let scale = country_scale(&dated, dims());
        assert_eq!(scale.domain(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn draws_one_fixed_radius_point_per_event() {
        let events = vec![event("A", "2020-01-01"), event("B", "2021-06-15")];
        let mut scene = Scene::new(800.0, 500.0);
        render(&mut scene, &events, dims());
        assert_eq!(scene.circles().count(), 2);
        for shape in scene.circles() {
            let Shape::Circle { radius, .. } = shape else {
                continue;
            };
            assert!((radius - EVENT_RADIUS).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn points_sit_at_band_centers() {
        let events = vec![event("A", "2020-01-01"), event("B", "2021-06-15")];
        let dated = dated_events(&events);
        let y_scale = country_scale(&dated, dims());
        let mut scene = Scene::new(800.0, 500.0);
        render(&mut scene, &events, dims());

        let expected = y_scale.position("A").expect("in domain") + y_scale.bandwidth() / 2.0;
        let Some(Shape::Circle { y, .. }) = scene.circles().next() else {
            panic!("expected a circle");
        };
        assert!((y - expected).abs() < 1e-9);
    }

    #[test]
    fn malformed_dates_are_skipped() {
        let events = vec![event("A", "2020-01-01"), event("B", "not-a-date")];
        let mut scene = Scene::new(800.0, 500.0);
        render(&mut scene, &events, dims());
        assert_eq!(scene.circles().count(), 1);
    }
}
