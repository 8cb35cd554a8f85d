use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Node categories appearing in strategy mind maps. Unknown wire values
/// collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Pillar,
    Category,
    Sector,
    Initiative,
    Action,
    Application,
    #[serde(other)]
    Other,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Pillar => "pillar",
            Self::Category => "category",
            Self::Sector => "sector",
            Self::Initiative => "initiative",
            Self::Action => "action",
            Self::Application => "application",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "root" => Self::Root,
            "pillar" => Self::Pillar,
            "category" => Self::Category,
            "sector" => Self::Sector,
            "initiative" => Self::Initiative,
            "action" => Self::Action,
            "application" => Self::Application,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Pillar => "Pillar",
            Self::Category => "Category",
            Self::Sector => "Sector",
            Self::Initiative => "Initiative",
            Self::Action => "Action",
            Self::Application => "Application",
            Self::Other => "Other",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Root => Color::Rgb(13, 110, 253),
            Self::Pillar => Color::Rgb(25, 135, 84),
            Self::Category => Color::Rgb(255, 194, 7),
            Self::Sector => Color::Rgb(220, 53, 69),
            Self::Initiative => Color::Rgb(111, 66, 193),
            Self::Action => Color::Rgb(32, 201, 151),
            Self::Application => Color::Rgb(253, 126, 20),
            Self::Other => Color::Rgb(108, 117, 125),
        }
    }
}

/// Publication status of a country's strategy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyStatus {
    Published,
    Draft,
    UnderDevelopment,
    #[serde(other)]
    Unknown,
}

impl StrategyStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::UnderDevelopment => "under_development",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::UnderDevelopment => "In development",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Published => Color::Green,
            Self::Draft => Color::Yellow,
            Self::UnderDevelopment => Color::Cyan,
            Self::Unknown => Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_parses_known_values() {
        assert_eq!(NodeKind::parse("pillar"), NodeKind::Pillar);
        assert_eq!(NodeKind::parse(" Sector "), NodeKind::Sector);
    }

    #[test]
    fn unknown_node_kind_falls_back_to_other() {
        assert_eq!(NodeKind::parse("milestone"), NodeKind::Other);
        assert_eq!(NodeKind::Other.color(), Color::Rgb(108, 117, 125));
    }

    #[test]
    fn unknown_node_kind_deserializes_to_other() {
        let kind: NodeKind = serde_json::from_str("\"milestone\"").expect("valid json string");
        assert_eq!(kind, NodeKind::Other);
    }

    #[test]
    fn status_deserializes_snake_case() {
        let status: StrategyStatus =
            serde_json::from_str("\"under_development\"").expect("valid json string");
        assert_eq!(status, StrategyStatus::UnderDevelopment);
    }
}
