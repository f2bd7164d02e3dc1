use serde_json::{Value, json};

/// Create a text node with the given content
pub fn text_node(content: &str) -> Value {
    json!({
        "type": "text",
        "text": content
    })
}

/// Create a text node with an inline style object
pub fn styled_text(content: &str, style: Value) -> Value {
    json!({
        "type": "text",
        "text": content,
        "style": style
    })
}

/// Create a button whose action logs the given message
pub fn log_button(label: &str, message: &str) -> Value {
    json!({
        "type": "button",
        "text": label,
        "action": {
            "type": "log",
            "message": message
        }
    })
}

/// Create a column containing the given children
pub fn column_of(children: Vec<Value>) -> Value {
    json!({
        "type": "column",
        "children": children
    })
}

/// Create a row containing the given children
pub fn row_of(children: Vec<Value>) -> Value {
    json!({
        "type": "row",
        "children": children
    })
}

/// Wrap a child node in a plain container
pub fn container_with(child: Value) -> Value {
    json!({
        "type": "container",
        "child": child
    })
}

/// Create a checkbox bound to the given state id
pub fn checkbox(id: &str, label: &str, checked: bool) -> Value {
    json!({
        "type": "checkbox",
        "id": id,
        "label": label,
        "value": checked
    })
}

/// Create a dropdown bound to the given state id
pub fn dropdown(id: &str, options: Vec<&str>) -> Value {
    json!({
        "type": "dropdown",
        "id": id,
        "options": options
    })
}
