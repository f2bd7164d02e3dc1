//! Builders for leaf nodes with no required fields.

use crate::error::BuildResult;
use crate::interp::Composer;
use crate::style::resolve;
use crate::widget::Widget;
use serde_json::{Map, Value};

/// `divider` always produces a result; every field is optional.
pub fn divider(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    Ok(Some(Widget::Divider {
        thickness: config.get("thickness").and_then(resolve::length),
        color: config.get("color").and_then(resolve::color),
        indent: config.get("indent").and_then(resolve::length),
    }))
}
