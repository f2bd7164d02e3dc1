use serde_json::{Map, Value};
use std::env;
use wicker::style::{Color, EdgeInsets, FontWeight, TextStyle, resolve};
use wicker::{BuildResult, Composer, Interpreter, RenderError, Widget};

/// A document mixing stock nodes, the custom `badge` node registered below,
/// and one node type nothing knows how to build.
const DOCUMENT: &str = r##"{
    "type": "column",
    "children": [
        { "type": "row", "children": [
            { "type": "text", "text": "Inbox" },
            { "type": "badge", "label": "new", "color": "#D32F2F" }
        ]},
        { "type": "row", "children": [
            { "type": "text", "text": "Archive" },
            { "type": "badge", "label": "42" }
        ]},
        { "type": "sparkline", "points": [1, 4, 2, 8] },
        { "type": "text", "text": "The sparkline above failed; everything else rendered." }
    ]
}"##;

/// Builds a pill-shaped label out of stock widgets. Custom builders share
/// the style vocabulary through [`wicker::style::resolve`].
fn badge(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let Some(label) = config.get("label").and_then(Value::as_str) else {
        return Ok(None);
    };
    let text = Widget::Text {
        content: label.to_uppercase(),
        style: Some(TextStyle {
            color: Some(Color::WHITE),
            font_size: Some(11.0),
            font_weight: Some(FontWeight::BOLD),
            ..TextStyle::default()
        }),
        align: None,
    };
    Ok(Some(Widget::Container {
        child: Some(Box::new(text)),
        width: None,
        height: None,
        padding: Some(EdgeInsets::x(6.0)),
        margin: None,
        color: config
            .get("color")
            .and_then(resolve::color)
            .or(Some(Color::gray(96))),
        border_radius: Some(8.0),
    }))
}

fn main() -> Result<(), RenderError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "wicker=info");
        }
    }
    env_logger::init();

    let mut interpreter = Interpreter::new();
    interpreter.register("badge", badge);
    println!("✓ Registered the custom 'badge' node type.");

    let widget = interpreter
        .render_document(DOCUMENT)?
        .expect("the document root always renders");

    println!("\nWidget tree:");
    dump(&widget, 0);

    let errors: Vec<&str> = collect_errors(&widget);
    println!(
        "\n{} node(s) failed; each was contained as an inline error:",
        errors.len()
    );
    for message in errors {
        println!("  - {}", message);
    }

    Ok(())
}

fn dump(widget: &Widget, depth: usize) {
    let detail = match widget {
        Widget::Text { content, .. } => format!(" {:?}", content),
        Widget::Error { message } => format!(" <{}>", message),
        _ => String::new(),
    };
    println!("{}- {}{}", "  ".repeat(depth), widget.kind(), detail);
    for child in widget.children() {
        dump(child, depth + 1);
    }
}

fn collect_errors(widget: &Widget) -> Vec<&str> {
    let mut errors = Vec::new();
    if let Some(message) = widget.error_message() {
        errors.push(message);
    }
    for child in widget.children() {
        errors.extend(collect_errors(child));
    }
    errors
}
