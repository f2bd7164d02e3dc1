use std::env;
use wicker::{Interpreter, RenderError, Widget};

/// A document exercising every stock node type, the way a server would
/// deliver it: as one JSON string.
const GALLERY: &str = r##"{
    "type": "listView",
    "children": [
        { "type": "text", "text": "Widget gallery", "style": { "fontSize": 24, "fontWeight": "bold" } },
        { "type": "richText", "spans": [
            { "text": "Every node below is built from " },
            { "text": "plain JSON", "style": { "fontStyle": "italic" } },
            { "text": "." }
        ]},
        { "type": "divider", "color": "grey" },
        { "type": "card", "child": {
            "type": "column",
            "crossAxisAlignment": "start",
            "children": [
                { "type": "text", "text": "Layout" },
                { "type": "row", "mainAxisAlignment": "space-between", "children": [
                    { "type": "icon", "icon": "home" },
                    { "type": "icon", "icon": "search" },
                    { "type": "icon", "icon": "settings" }
                ]},
                { "type": "sizedBox", "height": 8 },
                { "type": "center", "child": { "type": "text", "text": "centered" } },
                { "type": "container", "padding": 12, "color": "#EEF2FF", "borderRadius": 6,
                  "child": { "type": "text", "text": "decorated box" } }
            ]
        }},
        { "type": "card", "child": {
            "type": "column",
            "children": [
                { "type": "text", "text": "Controls" },
                { "type": "textField", "id": "name", "label": "Name", "hint": "Jane Doe" },
                { "type": "checkbox", "id": "subscribe", "label": "Subscribe", "value": true },
                { "type": "dropdown", "id": "plan", "options": ["free", "pro", "team"] },
                { "type": "button", "text": "Submit", "action": { "type": "snackbar", "message": "submitted" } }
            ]
        }},
        { "type": "image", "url": "https://example.com/banner.png", "height": 120, "fit": "cover" }
    ]
}"##;

fn main() -> Result<(), RenderError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "wicker=info");
        }
    }
    env_logger::init();

    println!("Rendering the gallery document...");
    let interpreter = Interpreter::new();
    let widget = interpreter
        .render_document(GALLERY)?
        .expect("the gallery root always renders");
    println!("✓ Composed {} widgets.", node_count(&widget));

    println!("\nWidget tree:");
    dump(&widget, 0);

    // The whole tree serializes back to JSON, which is how a host on the
    // far side of a process boundary would consume it.
    println!("\nSerialized form of the first child:");
    let serialized = serde_json::to_string_pretty(widget.children()[0])?;
    println!("{}", serialized);

    Ok(())
}

fn dump(widget: &Widget, depth: usize) {
    println!("{}- {}", "  ".repeat(depth), widget.kind());
    for child in widget.children() {
        dump(child, depth + 1);
    }
}

fn node_count(widget: &Widget) -> usize {
    1 + widget.children().iter().map(|child| node_count(child)).sum::<usize>()
}
