//! Builders for image and icon nodes.

use super::str_field;
use crate::error::BuildResult;
use crate::interp::Composer;
use crate::style::resolve;
use crate::widget::{IconGlyph, ImageSource, Widget};
use serde_json::{Map, Value};

/// `image` needs a `url` or an `asset` reference; with neither there is
/// nothing to render. The fetch and any load failure are host concerns: on
/// failure the host swaps in a placeholder sized by
/// [`Widget::placeholder_size`].
pub fn image(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let source = if let Some(url) = str_field(config, "url") {
        ImageSource::Url(url.to_string())
    } else if let Some(asset) = str_field(config, "asset") {
        ImageSource::Asset(asset.to_string())
    } else {
        log::debug!("image node without a url or asset field, nothing to render");
        return Ok(None);
    };
    Ok(Some(Widget::Image {
        source,
        width: config.get("width").and_then(resolve::length),
        height: config.get("height").and_then(resolve::length),
        fit: config.get("fit").and_then(resolve::box_fit),
    }))
}

/// `icon` maps a name onto the glyph table; unmapped names degrade to the
/// help glyph rather than disappearing.
pub fn icon(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let Some(name) = str_field(config, "icon") else {
        log::debug!("icon node without an icon field, nothing to render");
        return Ok(None);
    };
    let glyph = IconGlyph::from_name(name).unwrap_or_else(|| {
        log::warn!("unmapped icon name: '{}', falling back to help", name);
        IconGlyph::Help
    });
    Ok(Some(Widget::Icon {
        glyph,
        size: config.get("size").and_then(resolve::length),
        color: config.get("color").and_then(resolve::color),
    }))
}
