use std::env;
use std::fs;
use wicker::{Composer, Interpreter, RenderError, Widget};

/// A simple CLI that renders a JSON UI document and prints the composed
/// widget tree.
fn main() -> Result<(), RenderError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Render a JSON UI document to a widget tree.");
        eprintln!();
        eprintln!("Usage: {} <path/to/document.json>", args[0]);
        eprintln!();
        eprintln!("To run examples:");
        eprintln!("  cargo run --example gallery");
        eprintln!("  cargo run --example custom_widget");
        std::process::exit(1);
    }

    let document = fs::read_to_string(&args[1])?;
    let interpreter = Interpreter::new();

    println!("Rendering {}...", &args[1]);
    match interpreter.render_node(&serde_json::from_str(&document)?) {
        Some(widget) => {
            print_tree(&widget, 0);
            let errors = error_count(&widget);
            if errors > 0 {
                println!("({} node(s) failed and rendered as inline errors)", errors);
            }
        }
        None => println!("The document produced no widget; a host would show its fallback view."),
    }
    Ok(())
}

fn print_tree(widget: &Widget, depth: usize) {
    println!("{}{}", "  ".repeat(depth), describe(widget));
    for child in widget.children() {
        print_tree(child, depth + 1);
    }
}

fn describe(widget: &Widget) -> String {
    match widget {
        Widget::Text { content, .. } => format!("text {:?}", content),
        Widget::Button { label, .. } => format!("button {:?}", label),
        Widget::Icon { glyph, .. } => format!("icon {:?}", glyph),
        Widget::Dropdown { options, selected, .. } => {
            format!("dropdown [{} options, {:?} selected]", options.len(), options[*selected])
        }
        Widget::Checkbox { checked, .. } => format!("checkbox [{}]", if *checked { "x" } else { " " }),
        Widget::Error { message } => format!("error <{}>", message),
        other => other.kind().to_string(),
    }
}

fn error_count(widget: &Widget) -> usize {
    let own = usize::from(widget.is_error());
    own + widget.children().iter().map(|child| error_count(child)).sum::<usize>()
}
