use super::color::Color;
use super::font::{FontStyle, FontWeight};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
    #[default]
    Start,
    End,
}

impl TextAlign {
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "right" => Ok(TextAlign::Right),
            "center" => Ok(TextAlign::Center),
            "justify" => Ok(TextAlign::Justify),
            "start" => Ok(TextAlign::Start),
            "end" => Ok(TextAlign::End),
            _ => Err(format!("invalid text align: '{}'", s)),
        }
    }
}

/// The resolved form of a node's `style` sub-object. Every field is
/// independently optional; an unset field falls back to whatever the host's
/// presentation layer defaults to.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.font_style.is_none()
    }
}
