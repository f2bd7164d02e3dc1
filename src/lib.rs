//! A registry-driven interpreter that turns JSON documents into widget trees.
//!
//! The structure and styling of a user interface live entirely in a data
//! document: a tree of typed nodes. [`Interpreter`] maps each node's `type`
//! tag to a builder through a mutable [`Registry`], resolves the shared
//! style vocabulary from loosely-typed values, and recursively composes
//! children into a [`Widget`] tree. Faults are contained at the node that
//! caused them as inline error widgets, so one malformed node degrades
//! locally instead of aborting the render.
//!
//! ```
//! use serde_json::json;
//! use wicker::{Composer, Interpreter};
//!
//! let interpreter = Interpreter::new();
//! let widget = interpreter.render_node(&json!({
//!     "type": "column",
//!     "children": [
//!         {"type": "text", "text": "Hello"},
//!         {"type": "button", "text": "Go", "action": {"type": "log", "message": "hi"}}
//!     ]
//! }));
//! assert!(widget.is_some());
//! ```
//!
//! Hosts extend the vocabulary by registering their own builders under new
//! `type` tags; see [`Interpreter::register`].

pub mod error;
pub mod interp;
pub mod state;
pub mod style;
pub mod widget;

pub use error::{BuildResult, RenderError};
pub use interp::{Composer, Interpreter, Registry, WidgetBuilder};
pub use state::{EphemeralStateStore, InMemoryStateStore, StateStore};
pub use widget::{Action, IconGlyph, ImageSource, TextSpan, Widget};
