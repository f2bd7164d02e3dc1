use serde_json::json;
use std::env;
use std::sync::Arc;
use wicker::{InMemoryStateStore, Interpreter, RenderError, StateStore, Widget};

/// A settings form whose controls all persist state under explicit ids.
const FORM: &str = r#"{
    "type": "column",
    "children": [
        { "type": "text", "text": "Preferences", "style": { "fontWeight": "bold" } },
        { "type": "textField", "id": "display-name", "label": "Display name", "value": "anonymous" },
        { "type": "checkbox", "id": "notifications", "label": "Notifications", "value": false },
        { "type": "dropdown", "id": "theme", "options": ["light", "dark", "system"] }
    ]
}"#;

fn main() -> Result<(), RenderError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "wicker=info");
        }
    }
    env_logger::init();

    // The host keeps its own handle on the store it hands the interpreter.
    let store = Arc::new(InMemoryStateStore::new());
    let interpreter = Interpreter::with_state(Arc::clone(&store));

    println!("First pass: controls seed from the document.");
    let first = interpreter
        .render_document(FORM)?
        .expect("the form root always renders");
    report(&first);

    // Simulate the user editing the form; the host writes each change back
    // through its store handle.
    store.set("display-name", json!("Ada"));
    store.set("notifications", json!(true));
    store.set("theme", json!("dark"));
    println!("\nThe user edits all three controls...");

    println!("\nSecond pass: the same document now renders the stored state.");
    let second = interpreter
        .render_document(FORM)?
        .expect("the form root always renders");
    report(&second);

    Ok(())
}

fn report(widget: &Widget) {
    for child in widget.children() {
        match child {
            Widget::TextField { label, value, .. } => {
                println!("  {}: {:?}", label.as_deref().unwrap_or("field"), value);
            }
            Widget::Checkbox { label, checked, .. } => {
                println!("  {}: {}", label.as_deref().unwrap_or("toggle"), checked);
            }
            Widget::Dropdown { options, selected, .. } => {
                println!("  theme: {:?}", options[*selected]);
            }
            _ => {}
        }
    }
}
