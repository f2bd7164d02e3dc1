//! The stock builder set, one builder per supported node type.
//!
//! Builders are pure functions of `(config, composer)` with no shared
//! mutable state. Each signals "nothing to render" with `Ok(None)` when a
//! required field is missing; that is a normal outcome, distinct from the
//! `Err` fault channel the interpreter converts to inline error nodes.

pub mod controls;
pub mod layout;
pub mod media;
pub mod misc;
pub mod text;

use crate::interp::{Composer, Registry};
use crate::widget::Widget;
use serde_json::{Map, Value};

/// Registers every stock builder; applied to each new interpreter's
/// registry before the host sees it.
pub(crate) fn install(registry: &mut Registry) {
    registry.register("text", text::text);
    registry.register("richText", text::rich_text);
    registry.register("button", controls::button);
    registry.register("textField", controls::text_field);
    registry.register("checkbox", controls::checkbox);
    registry.register("dropdown", controls::dropdown);
    registry.register("image", media::image);
    registry.register("icon", media::icon);
    registry.register("column", layout::column);
    registry.register("row", layout::row);
    registry.register("container", layout::container);
    registry.register("center", layout::center);
    registry.register("sizedBox", layout::sized_box);
    registry.register("card", layout::card);
    registry.register("listView", layout::list_view);
    registry.register("divider", misc::divider);
}

fn str_field<'a>(config: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    config.get(name).and_then(Value::as_str)
}

/// Renders the optional `child` sub-config of a single-child wrapper. A
/// child that builds to "no result" leaves the slot empty.
fn child_slot(config: &Map<String, Value>, ctx: &dyn Composer) -> Option<Box<Widget>> {
    config
        .get("child")
        .and_then(|child| ctx.render_node(child))
        .map(Box::new)
}

/// The explicit `id` a node persists interactive state under.
fn state_key(config: &Map<String, Value>) -> Option<&str> {
    str_field(config, "id")
}
