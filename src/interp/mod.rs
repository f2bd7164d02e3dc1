//! The core parser: registry-driven dispatch, recursive composition, and
//! failure containment.
//!
//! [`Interpreter`] walks a decoded JSON document top-down. At each node it
//! consults the [`Registry`] for the builder matching the node's `type` tag
//! and invokes it with the narrow [`Composer`] interface, through which the
//! builder composes any nested nodes. Every fault is contained at the node
//! that caused it by substituting an inline error widget, so one malformed
//! node never aborts the rest of the tree.

pub mod builders;
pub mod registry;

pub use registry::{Registry, WidgetBuilder};

use crate::error::RenderError;
use crate::state::{EphemeralStateStore, StateStore};
use crate::widget::Widget;
use serde_json::Value;

/// The composition interface injected into every builder invocation.
///
/// Builders depend on this trait rather than on a concrete interpreter,
/// which keeps the recursive dependency between the interpreter and its
/// builder set explicit and lets tests substitute their own composer.
pub trait Composer {
    /// Renders one node config. Never fails outward:
    ///
    /// - a config that is not an object, or whose `type` field is missing,
    ///   empty or not a string, becomes an inline error node;
    /// - a `type` with no registered builder becomes an inline error node
    ///   naming the tag;
    /// - a builder fault is caught here and becomes an inline error node
    ///   carrying the diagnostic;
    /// - a builder's "nothing to render" passes through as `None`.
    fn render_node(&self, config: &Value) -> Option<Widget>;

    /// Renders a `children` array in input order. Elements that are not
    /// objects never reach a builder and are dropped with a debug log;
    /// elements that render to "no result" are omitted. Order is otherwise
    /// preserved verbatim.
    fn render_children(&self, configs: &[Value]) -> Vec<Widget>;

    /// The store interactive builders seed their state through.
    fn state(&self) -> &dyn StateStore;
}

/// The document interpreter.
///
/// Owns a [`Registry`] pre-populated with the stock builder set and an
/// injected [`StateStore`]. There is no other state: a render pass is a
/// plain recursive call tree over the config, and passes are independent.
///
/// Registration must not be interleaved with an in-flight render pass on
/// the same interpreter; callers wanting concurrent renders use separate
/// interpreters or serialize externally.
pub struct Interpreter {
    registry: Registry,
    state: Box<dyn StateStore>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter with the stock builders and a store that persists
    /// nothing, so interactive widgets reseed from the config every pass.
    pub fn new() -> Self {
        Self::with_state(EphemeralStateStore::new())
    }

    /// An interpreter whose interactive widgets seed through `state`.
    pub fn with_state(state: impl StateStore + 'static) -> Self {
        let mut registry = Registry::new();
        builders::install(&mut registry);
        Self { registry, state: Box::new(state) }
    }

    /// Registers a custom node type, or replaces a stock builder.
    pub fn register(&mut self, tag: impl Into<String>, builder: impl WidgetBuilder + 'static) {
        self.registry.register(tag, builder);
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decodes a JSON document and renders its root node.
    pub fn render_document(&self, document: &str) -> Result<Option<Widget>, RenderError> {
        let root: Value = serde_json::from_str(document)?;
        Ok(self.render_node(&root))
    }
}

impl Composer for Interpreter {
    fn render_node(&self, config: &Value) -> Option<Widget> {
        let Some(node) = config.as_object() else {
            log::warn!("node config is not an object: {}", config);
            return Some(Widget::error("missing type field"));
        };
        let tag = match node.get("type").and_then(Value::as_str) {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                log::warn!("node config without a type field: {}", config);
                return Some(Widget::error("missing type field"));
            }
        };
        let Some(builder) = self.registry.lookup(tag) else {
            log::warn!("unknown widget type: {}", tag);
            return Some(Widget::error(format!("unknown widget type: {}", tag)));
        };
        match builder.build(node, self) {
            Ok(widget) => widget,
            Err(fault) => {
                log::warn!("builder for '{}' failed: {}", tag, fault);
                Some(Widget::error(format!("parse error: {}", fault)))
            }
        }
    }

    fn render_children(&self, configs: &[Value]) -> Vec<Widget> {
        configs
            .iter()
            .filter_map(|config| {
                if !config.is_object() {
                    log::debug!("skipping non-object child entry: {}", config);
                    return None;
                }
                self.render_node(config)
            })
            .collect()
    }

    fn state(&self) -> &dyn StateStore {
        self.state.as_ref()
    }
}
