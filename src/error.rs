//! The unified error type for document rendering.

use crate::widget::Widget;
use thiserror::Error;

/// The main error enum for all fallible operations in the crate.
///
/// Builder faults never escape
/// [`render_node`](crate::interp::Composer::render_node); they are converted
/// to inline error nodes at that boundary. `Err` values surface to callers
/// only on the document-decoding and file-reading paths.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Build(String),
}

impl RenderError {
    /// Shorthand for the fault channel builders raise through.
    pub fn build(message: impl Into<String>) -> RenderError {
        RenderError::Build(message.into())
    }
}

/// What a builder returns: a widget, an explicit "nothing to render"
/// (`Ok(None)`), or a fault for the interpreter to contain.
pub type BuildResult = Result<Option<Widget>, RenderError>;
