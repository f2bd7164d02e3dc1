//! The type-tag to builder mapping, the sole dispatch and extensibility
//! mechanism of the interpreter.

use crate::error::BuildResult;
use crate::interp::Composer;
use itertools::Itertools;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Turns one node config into a widget, an explicit absence, or a fault.
///
/// Builders compose nested nodes through the injected [`Composer`], never
/// through a global interpreter reference. Plain functions and closures with
/// the matching signature implement this trait automatically.
pub trait WidgetBuilder: Send + Sync {
    fn build(&self, config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult;
}

impl<F> WidgetBuilder for F
where
    F: Fn(&Map<String, Value>, &dyn Composer) -> BuildResult + Send + Sync,
{
    fn build(&self, config: &Map<String, Value>, ctx: &dyn Composer) -> BuildResult {
        self(config, ctx)
    }
}

/// Maps a node's `type` tag to the builder that handles it.
///
/// Tags are case-sensitive exact matches with no wildcard or prefix forms.
/// Re-registering a tag replaces the prior builder.
#[derive(Default)]
pub struct Registry {
    builders: HashMap<String, Box<dyn WidgetBuilder>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `builder` under `tag`, overwriting any prior registration.
    pub fn register(&mut self, tag: impl Into<String>, builder: impl WidgetBuilder + 'static) {
        let tag = tag.into();
        if tag.is_empty() {
            log::warn!("ignoring builder registration for an empty tag");
            return;
        }
        self.builders.insert(tag, Box::new(builder));
    }

    /// Pure lookup; `None` for unknown tags.
    pub fn lookup(&self, tag: &str) -> Option<&dyn WidgetBuilder> {
        self.builders.get(tag).map(Box::as_ref)
    }

    /// Registered tags in sorted order, for diagnostics and discovery.
    pub fn tags(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).sorted().collect()
    }
}
