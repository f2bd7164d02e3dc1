//! The shared style vocabulary and its resolvers.
//!
//! Typed primitives live in the submodules; [`resolve`] holds the total
//! functions that map loosely-typed config values onto them.

pub mod color;
pub mod dimension;
pub mod fit;
pub mod flex;
pub mod font;
pub mod resolve;
pub mod text;

pub use color::Color;
pub use dimension::EdgeInsets;
pub use fit::BoxFit;
pub use flex::{Axis, CrossAxisAlignment, MainAxisAlignment, MainAxisSize};
pub use font::{FontStyle, FontWeight};
pub use text::{TextAlign, TextStyle};
