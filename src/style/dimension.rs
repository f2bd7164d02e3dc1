//! Spacing primitives for padding and margin fields.
use serde::{Deserialize, Deserializer, Serialize};

/// A four-sided spacing box. Configs write either a bare number (uniform on
/// all sides) or an object with any subset of `left`/`top`/`right`/`bottom`,
/// where omitted sides are 0.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn x(value: f32) -> Self {
        Self {
            left: value,
            top: 0f32,
            right: value,
            bottom: 0f32,
        }
    }

    pub fn y(value: f32) -> Self {
        Self {
            left: 0f32,
            top: value,
            right: 0f32,
            bottom: value,
        }
    }
}

impl<'de> Deserialize<'de> for EdgeInsets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum InsetsDef {
            Uniform(f32),
            Sides {
                #[serde(default)]
                left: f32,
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
            },
        }

        match InsetsDef::deserialize(deserializer)? {
            InsetsDef::Uniform(value) => Ok(EdgeInsets::all(value)),
            InsetsDef::Sides { left, top, right, bottom } => {
                Ok(EdgeInsets { left, top, right, bottom })
            }
        }
    }
}
