//! Builders for text-bearing leaf nodes.

use super::str_field;
use crate::error::BuildResult;
use crate::interp::Composer;
use crate::style::resolve;
use crate::widget::{TextSpan, Widget};
use serde_json::{Map, Value};

/// `text` renders a single styled run; without a `text` field there is
/// nothing to render.
pub fn text(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let Some(content) = str_field(config, "text") else {
        log::debug!("text node without a text field, nothing to render");
        return Ok(None);
    };
    Ok(Some(Widget::Text {
        content: content.to_string(),
        style: config.get("style").and_then(resolve::text_style),
        align: config.get("textAlign").and_then(resolve::text_align),
    }))
}

/// `richText` concatenates styled spans. Spans without text are skipped
/// with a diagnostic; a missing or effectively empty `spans` array means
/// nothing to render. Alignment falls back to start.
pub fn rich_text(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let Some(entries) = config.get("spans").and_then(Value::as_array) else {
        log::debug!("rich text node without a spans array, nothing to render");
        return Ok(None);
    };
    let spans: Vec<TextSpan> = entries.iter().filter_map(span_of).collect();
    if spans.is_empty() {
        log::debug!("rich text node with no usable spans, nothing to render");
        return Ok(None);
    }
    let align = config
        .get("textAlign")
        .and_then(resolve::text_align)
        .unwrap_or_default();
    Ok(Some(Widget::RichText { spans, align }))
}

fn span_of(entry: &Value) -> Option<TextSpan> {
    let Some(span) = entry.as_object() else {
        log::warn!("rich text span is not an object, skipping: {}", entry);
        return None;
    };
    let Some(text) = span.get("text").and_then(Value::as_str) else {
        log::warn!("rich text span without a text field, skipping");
        return None;
    };
    Some(TextSpan {
        text: text.to_string(),
        style: span.get("style").and_then(resolve::text_style),
    })
}
