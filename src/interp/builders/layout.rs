//! Builders for container and layout nodes.

use super::child_slot;
use crate::error::BuildResult;
use crate::interp::Composer;
use crate::style::{resolve, Axis, EdgeInsets};
use crate::widget::Widget;
use serde_json::{Map, Value};

const CARD_ELEVATION: f32 = 1.0;
const CARD_PADDING: f32 = 8.0;

pub fn column(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    flex(Axis::Vertical, config, ctx)
}

pub fn row(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    flex(Axis::Horizontal, config, ctx)
}

/// Shared by `column` and `row`. A missing `children` field means nothing
/// to render; an empty array is a valid container with zero children.
fn flex(axis: Axis, config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    let Some(children) = config.get("children").and_then(Value::as_array) else {
        log::debug!("flex container without a children field, nothing to render");
        return Ok(None);
    };
    Ok(Some(Widget::Flex {
        axis,
        main_axis_alignment: config
            .get("mainAxisAlignment")
            .and_then(resolve::main_axis_alignment)
            .unwrap_or_default(),
        cross_axis_alignment: config
            .get("crossAxisAlignment")
            .and_then(resolve::cross_axis_alignment)
            .unwrap_or_default(),
        main_axis_size: config
            .get("mainAxisSize")
            .and_then(resolve::main_axis_size)
            .unwrap_or_default(),
        children: ctx.render_children(children),
    }))
}

/// `container` wraps zero or one child; every decoration is independently
/// optional.
pub fn container(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    Ok(Some(Widget::Container {
        child: child_slot(config, ctx),
        width: config.get("width").and_then(resolve::length),
        height: config.get("height").and_then(resolve::length),
        padding: config.get("padding").and_then(resolve::edge_insets),
        margin: config.get("margin").and_then(resolve::edge_insets),
        color: config.get("color").and_then(resolve::color),
        border_radius: config.get("borderRadius").and_then(resolve::border_radius),
    }))
}

pub fn center(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    Ok(Some(Widget::Center { child: child_slot(config, ctx) }))
}

pub fn sized_box(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    Ok(Some(Widget::SizedBox {
        child: child_slot(config, ctx),
        width: config.get("width").and_then(resolve::length),
        height: config.get("height").and_then(resolve::length),
    }))
}

/// `card` applies its stock elevation and padding when the config leaves
/// them unset.
pub fn card(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    Ok(Some(Widget::Card {
        child: child_slot(config, ctx),
        elevation: config
            .get("elevation")
            .and_then(resolve::length)
            .unwrap_or(CARD_ELEVATION),
        padding: config
            .get("padding")
            .and_then(resolve::edge_insets)
            .unwrap_or(EdgeInsets::all(CARD_PADDING)),
        color: config.get("color").and_then(resolve::color),
    }))
}

/// `listView` renders its children like a flex container but carries a
/// `shrinkWrap` sizing hint for the host instead of alignment fields.
pub fn list_view(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    let Some(children) = config.get("children").and_then(Value::as_array) else {
        log::debug!("list view without a children field, nothing to render");
        return Ok(None);
    };
    Ok(Some(Widget::ListView {
        shrink_wrap: config
            .get("shrinkWrap")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        children: ctx.render_children(children),
    }))
}
