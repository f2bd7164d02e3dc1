//! Total resolvers from loosely-typed config values to typed style primitives.
//!
//! Every function here maps a raw `serde_json::Value` to `Some(resolved)` or
//! `None` for "unset". Unrecognized input is never an error: it logs a
//! diagnostic and resolves to unset, so a bad style value degrades to the
//! renderable's own default instead of aborting the node.

use super::color::Color;
use super::dimension::EdgeInsets;
use super::fit::BoxFit;
use super::flex::{CrossAxisAlignment, MainAxisAlignment, MainAxisSize};
use super::font::{FontStyle, FontWeight};
use super::text::{TextAlign, TextStyle};
use serde_json::Value;

fn unset_on_err<T>(result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            log::warn!("{}; treating as unset", message);
            None
        }
    }
}

fn str_of<'a>(value: &'a Value, what: &str) -> Result<&'a str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("{} is not a string: {}", what, value))
}

/// Resolves a `#RRGGBB` hex string or a named palette color.
pub fn color(value: &Value) -> Option<Color> {
    unset_on_err(str_of(value, "color").and_then(Color::parse))
}

pub fn text_align(value: &Value) -> Option<TextAlign> {
    unset_on_err(str_of(value, "text align").and_then(TextAlign::parse))
}

pub fn main_axis_alignment(value: &Value) -> Option<MainAxisAlignment> {
    unset_on_err(str_of(value, "main axis alignment").and_then(MainAxisAlignment::parse))
}

pub fn cross_axis_alignment(value: &Value) -> Option<CrossAxisAlignment> {
    unset_on_err(str_of(value, "cross axis alignment").and_then(CrossAxisAlignment::parse))
}

pub fn main_axis_size(value: &Value) -> Option<MainAxisSize> {
    unset_on_err(str_of(value, "main axis size").and_then(MainAxisSize::parse))
}

pub fn font_style(value: &Value) -> Option<FontStyle> {
    unset_on_err(str_of(value, "font style").and_then(FontStyle::parse))
}

pub fn box_fit(value: &Value) -> Option<BoxFit> {
    unset_on_err(str_of(value, "box fit").and_then(BoxFit::parse))
}

/// Resolves a named token ("bold", "normal") or a numeric weight on the
/// stepped 100-900 scale.
pub fn font_weight(value: &Value) -> Option<FontWeight> {
    let parsed = match value {
        Value::String(s) => FontWeight::parse(s),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("invalid font weight: {}", n))
            .and_then(FontWeight::from_numeric),
        other => Err(format!("font weight is not a string or number: {}", other)),
    };
    unset_on_err(parsed)
}

/// Resolves a scalar length from a number or a numeric string.
pub fn length(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        Value::String(s) => match s.trim().parse::<f32>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("invalid length: '{}'; treating as unset", s);
                None
            }
        },
        other => {
            log::warn!("length is not a number: {}; treating as unset", other);
            None
        }
    }
}

/// Resolves a uniform circular corner radius.
pub fn border_radius(value: &Value) -> Option<f32> {
    length(value)
}

/// Resolves a spacing box from either a bare number (uniform on all sides)
/// or an object with independently optional sides defaulting to 0.
pub fn edge_insets(value: &Value) -> Option<EdgeInsets> {
    match value {
        Value::Number(_) | Value::String(_) => length(value).map(EdgeInsets::all),
        Value::Object(sides) => {
            let side = |name: &str| sides.get(name).and_then(length).unwrap_or(0.0);
            Some(EdgeInsets {
                left: side("left"),
                top: side("top"),
                right: side("right"),
                bottom: side("bottom"),
            })
        }
        other => {
            log::warn!("spacing is not a number or object: {}; treating as unset", other);
            None
        }
    }
}

/// Folds a node's `style` sub-object into a [`TextStyle`], resolving each
/// field independently.
pub fn text_style(value: &Value) -> Option<TextStyle> {
    let Some(fields) = value.as_object() else {
        log::warn!("style is not an object: {}; treating as unset", value);
        return None;
    };
    let mut style = TextStyle::default();
    for (key, val) in fields {
        match key.to_lowercase().replace(['-', '_'], "").as_str() {
            "color" => style.color = color(val),
            "fontsize" => style.font_size = length(val),
            "fontweight" => style.font_weight = font_weight(val),
            "fontstyle" => style.font_style = font_style(val),
            _ => {
                // Unknown style fields are ignored.
            }
        }
    }
    Some(style)
}
