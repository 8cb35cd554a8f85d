//! Transient tooltip overlay shown near the pointer.

/// Offsets applied to the anchor position, in surface units.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -10.0;

/// Content composed into tooltip lines. `value` is rendered whenever it is
/// set, including zero.
#[derive(Debug, Clone, Default)]
pub struct TooltipContent {
    pub title: String,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub value: Option<f64>,
}

impl TooltipContent {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if let Some(description) = &self.description {
            lines.push(description.clone());
        }
        if let Some(budget) = &self.budget {
            lines.push(format!("Budget: {budget}"));
        }
        if let Some(value) = self.value {
            lines.push(format!("Value: {value}"));
        }
        lines
    }
}

/// The single tooltip overlay. At most one is shown at a time; showing a
/// new one replaces the previous.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    visible: bool,
    x: f64,
    y: f64,
    lines: Vec<String>,
}

impl Tooltip {
    pub fn show(&mut self, anchor_x: f64, anchor_y: f64, content: &TooltipContent) {
        self.visible = true;
        self.x = anchor_x + OFFSET_X;
        self.y = anchor_y + OFFSET_Y;
        self.lines = content.lines();
    }

    /// Safe to call when nothing is shown.
    pub fn hide(&mut self) {
        self.visible = false;
        self.lines.clear();
    }

    pub const fn visible(&self) -> bool {
        self.visible
    }

    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_zero_is_still_rendered() {
        let content = TooltipContent {
            title: "Skills Development".into(),
            description: None,
            budget: None,
            value: Some(0.0),
        };
        assert_eq!(content.lines(), vec!["Skills Development", "Value: 0"]);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let content = TooltipContent::titled("Kenya");
        assert_eq!(content.lines(), vec!["Kenya"]);
    }

    #[test]
    fn full_content_composes_in_order() {
        let content = TooltipContent {
            title: "AI Infrastructure".into(),
            description: Some("National backbone".into()),
            budget: Some("USD 100 million".into()),
            value: Some(0.5),
        };
        assert_eq!(
            content.lines(),
            vec![
                "AI Infrastructure",
                "National backbone",
                "Budget: USD 100 million",
                "Value: 0.5",
            ]
        );
    }

    #[test]
    fn show_offsets_anchor_and_hide_is_idempotent() {
        let mut tooltip = Tooltip::default();
        tooltip.show(100.0, 50.0, &TooltipContent::titled("Kenya"));
        assert!(tooltip.visible());
        assert_eq!(tooltip.position(), (110.0, 40.0));

        tooltip.hide();
        tooltip.hide();
        assert!(!tooltip.visible());
        assert!(tooltip.lines().is_empty());
    }
}
