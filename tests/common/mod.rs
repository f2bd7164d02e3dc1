pub mod fixtures;

use serde_json::Value;
use wicker::{Composer, Interpreter, Widget};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Render one config through a fresh interpreter with the stock builders
/// and the default (ephemeral) state store.
pub fn render(config: &Value) -> Option<Widget> {
    Interpreter::new().render_node(config)
}

/// Render, asserting the config produced a widget at all.
pub fn render_some(config: &Value) -> Result<Widget, Box<dyn std::error::Error>> {
    render(config).ok_or_else(|| format!("expected a widget from config: {}", config).into())
}

/// Count inline error nodes across a whole tree.
pub fn error_count(widget: &Widget) -> usize {
    let own = usize::from(widget.is_error());
    own + widget
        .children()
        .iter()
        .map(|child| error_count(child))
        .sum::<usize>()
}
