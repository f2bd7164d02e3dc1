//! Enums for the flex-layout vocabulary shared by `column` and `row` nodes.
use serde::{Deserialize, Serialize};

/// Lowercases and strips separators so `spaceBetween`, `space-between` and
/// `SPACE_BETWEEN` all normalize to `spacebetween`.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], "")
}

/// The direction a flex container lays its children out in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum MainAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl MainAxisAlignment {
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match normalize(s).as_str() {
            "start" => Ok(MainAxisAlignment::Start),
            "end" => Ok(MainAxisAlignment::End),
            "center" => Ok(MainAxisAlignment::Center),
            "spacebetween" => Ok(MainAxisAlignment::SpaceBetween),
            "spacearound" => Ok(MainAxisAlignment::SpaceAround),
            "spaceevenly" => Ok(MainAxisAlignment::SpaceEvenly),
            _ => Err(format!("invalid main axis alignment: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum CrossAxisAlignment {
    Start,
    End,
    #[default]
    Center,
    Stretch,
    Baseline,
}

impl CrossAxisAlignment {
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match normalize(s).as_str() {
            "start" => Ok(CrossAxisAlignment::Start),
            "end" => Ok(CrossAxisAlignment::End),
            "center" => Ok(CrossAxisAlignment::Center),
            "stretch" => Ok(CrossAxisAlignment::Stretch),
            "baseline" => Ok(CrossAxisAlignment::Baseline),
            _ => Err(format!("invalid cross axis alignment: '{}'", s)),
        }
    }
}

/// Whether a flex container takes the full main-axis extent or shrinks to
/// its content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum MainAxisSize {
    Min,
    #[default]
    Max,
}

impl MainAxisSize {
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match normalize(s).as_str() {
            "min" => Ok(MainAxisSize::Min),
            "max" => Ok(MainAxisSize::Max),
            _ => Err(format!("invalid main axis size: '{}'", s)),
        }
    }
}
