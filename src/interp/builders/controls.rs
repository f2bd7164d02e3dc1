//! Builders for interactive control nodes.
//!
//! Controls carry per-node state (a toggle, a selection, an edit buffer)
//! that the interpreter itself never owns: builders seed the initial value
//! through the composer's state store and record the node's `id` on the
//! widget so the host can write changes back. See [`crate::state`].

use super::{state_key, str_field};
use crate::error::BuildResult;
use crate::interp::Composer;
use crate::style::resolve;
use crate::widget::{Action, Widget};
use serde_json::{Map, Value};

/// `button` needs a label. The optional `action` dispatches on
/// `action.type`; unknown action types are logged and degrade to an
/// action-less button, never an error.
pub fn button(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let Some(label) = str_field(config, "text") else {
        log::debug!("button node without a text field, nothing to render");
        return Ok(None);
    };
    Ok(Some(Widget::Button {
        label: label.to_string(),
        action: config.get("action").and_then(action_of),
        style: config.get("style").and_then(resolve::text_style),
    }))
}

fn action_of(value: &Value) -> Option<Action> {
    let Some(fields) = value.as_object() else {
        log::warn!("action is not an object, ignoring: {}", value);
        return None;
    };
    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match fields.get("type").and_then(Value::as_str) {
        Some("log") => Some(Action::Log { message }),
        Some("snackbar") => Some(Action::Snackbar { message }),
        Some(other) => {
            log::warn!("unknown action type: {}", other);
            None
        }
        None => {
            log::warn!("action without a type field, ignoring");
            None
        }
    }
}

/// `textField` always renders. The seeded value flows through the state
/// store so a host that persists edits sees them again next pass.
pub fn text_field(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    let seed = str_field(config, "value").unwrap_or_default();
    let key = state_key(config);
    let value = match key {
        Some(id) => ctx
            .state()
            .seed(id, Value::String(seed.to_string()))
            .as_str()
            .unwrap_or(seed)
            .to_string(),
        None => seed.to_string(),
    };
    Ok(Some(Widget::TextField {
        label: str_field(config, "label").map(str::to_string),
        hint: str_field(config, "hint").map(str::to_string),
        value,
        state_key: key.map(str::to_string),
    }))
}

/// `checkbox` seeds its toggle from `value`, defaulting to unchecked.
pub fn checkbox(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    let seed = config.get("value").and_then(Value::as_bool).unwrap_or(false);
    let key = state_key(config);
    let checked = match key {
        Some(id) => ctx
            .state()
            .seed(id, Value::Bool(seed))
            .as_bool()
            .unwrap_or(seed),
        None => seed,
    };
    Ok(Some(Widget::Checkbox {
        label: str_field(config, "label").map(str::to_string),
        checked,
        state_key: key.map(str::to_string),
    }))
}

/// `dropdown` needs a non-empty `options` array. Options are coerced to
/// strings; non-scalar entries are skipped with a diagnostic. Selection
/// starts at the first option unless the state store remembers a choice.
pub fn dropdown(config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
    let Some(entries) = config.get("options").and_then(Value::as_array) else {
        log::debug!("dropdown node without an options array, nothing to render");
        return Ok(None);
    };
    let options: Vec<String> = entries.iter().filter_map(option_label).collect();
    if options.is_empty() {
        log::debug!("dropdown node with no usable options, nothing to render");
        return Ok(None);
    }
    let key = state_key(config);
    let selected = key
        .and_then(|id| {
            let stored = ctx.state().seed(id, Value::String(options[0].clone()));
            stored
                .as_str()
                .and_then(|choice| options.iter().position(|option| option == choice))
        })
        .unwrap_or(0);
    Ok(Some(Widget::Dropdown {
        options,
        selected,
        state_key: key.map(str::to_string),
    }))
}

fn option_label(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            log::warn!("dropdown option is not a scalar, skipping: {}", other);
            None
        }
    }
}
