//! Axis scales shared by the timeline and heatmap renderers.

use chrono::NaiveDate;
use ratatui::style::Color;

/// Continuous time scale mapping `[start, end]` onto a pixel range.
#[derive(Debug, Clone)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    range: (f64, f64),
}

impl TimeScale {
    /// Builds a scale over the extent of `dates`. Returns `None` when no
    /// dates are given.
    pub fn from_extent(dates: &[NaiveDate], range: (f64, f64)) -> Option<Self> {
        let start = *dates.iter().min()?;
        let end = *dates.iter().max()?;
        Some(Self { start, end, range })
    }

    pub const fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn position(&self, date: NaiveDate) -> f64 {
        let span = (self.end - self.start).num_days();
        if span == 0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let offset = (date - self.start).num_days() as f64 / span as f64;
        self.range.0 + offset * (self.range.1 - self.range.0)
    }

    /// Evenly spaced tick dates across the domain, including both ends.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let span = (self.end - self.start).num_days();
        if span == 0 || count < 2 {
            return vec![self.start];
        }
        (0..count)
            .map(|i| {
                let days = span * i as i64 / (count as i64 - 1);
                self.start + chrono::Duration::days(days)
            })
            .collect()
    }
}

/// Categorical band scale with symmetric inner and outer padding,
/// preserving first-seen category order.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for category in categories {
            let category = category.into();
            if !domain.contains(&category) {
                domain.push(category);
            }
        }
        Self {
            domain,
            range,
            padding,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (n + self.padding)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start position of the band for `category`, if it is in the domain.
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.iter().position(|c| c == category)?;
        let step = self.step();
        Some(self.range.0 + step.mul_add(self.padding, index as f64 * step))
    }
}

/// Sequential color scale over `[0, 1]`, interpolating light to dark blue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialBlues;

impl SequentialBlues {
    const LIGHT: (f64, f64, f64) = (247.0, 251.0, 255.0);
    const DARK: (f64, f64, f64) = (8.0, 48.0, 107.0);

    pub fn color(self, value: f64) -> Color {
        let t = value.clamp(0.0, 1.0);
        let lerp = |a: f64, b: f64| (b - a).mul_add(t, a).round() as u8;
        Color::Rgb(
            lerp(Self::LIGHT.0, Self::DARK.0),
            lerp(Self::LIGHT.1, Self::DARK.1),
            lerp(Self::LIGHT.2, Self::DARK.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn time_scale_spans_extent() {
        let dates = vec![date("2021-06-15"), date("2020-01-01")];
        let scale = TimeScale::from_extent(&dates, (0.0, 100.0)).expect("non-empty");
        assert_eq!(scale.domain(), (date("2020-01-01"), date("2021-06-15")));
        assert!((scale.position(date("2020-01-01")) - 0.0).abs() < f64::EPSILON);
        assert!((scale.position(date("2021-06-15")) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn band_scale_dedups_and_keeps_order() {
        let scale = BandScale::new(["b", "a", "b"], (0.0, 100.0), 0.1);
        assert_eq!(scale.domain(), ["b".to_string(), "a".to_string()]);
        let b = scale.position("b").expect("in domain");
        let a = scale.position("a").expect("in domain");
        assert!(b < a);
        assert!(scale.bandwidth() > 0.0);
        assert_eq!(scale.position("c"), None);
    }

    #[test]
    fn bands_fit_inside_range() {
        let scale = BandScale::new(["x", "y", "z"], (0.0, 90.0), 0.05);
        let last = scale.position("z").expect("in domain");
        assert!(last + scale.bandwidth() <= 90.0 + 1e-9);
    }

    #[test]
    fn blues_run_light_to_dark_monotonically() {
        let scale = SequentialBlues;
        assert_eq!(scale.color(0.0), Color::Rgb(247, 251, 255));
        assert_eq!(scale.color(1.0), Color::Rgb(8, 48, 107));

        let red = |c: Color| match c {
            Color::Rgb(r, _, _) => r,
            _ => unreachable!(),
        };
        let mut previous = red(scale.color(0.0));
        for i in 1..=10 {
            let current = red(scale.color(f64::from(i) / 10.0));
            assert!(current <= previous);
            previous = current;
        }
    }
}
