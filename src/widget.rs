//! The renderable widget tree.
//!
//! This module defines the in-memory representation of a composed user
//! interface after interpretation but before presentation. The crate never
//! paints or lays these out; a host presentation layer consumes the tree.

use crate::style::{
    Axis, BoxFit, Color, CrossAxisAlignment, EdgeInsets, MainAxisAlignment, MainAxisSize,
    TextAlign, TextStyle,
};
use serde::Serialize;

/// Edge length of the square placeholder a host substitutes for an image
/// that failed to load and declared no size of its own.
pub const PLACEHOLDER_EDGE: f32 = 100.0;

/// A run of text inside a `richText` widget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextSpan {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

/// What a button does when activated. Unknown action types in a config are
/// logged and dropped, leaving the button action-less.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Log { message: String },
    Snackbar { message: String },
}

/// Where an image's bytes come from. The fetch itself is a host concern.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ImageSource {
    Url(String),
    Asset(String),
}

/// The closed set of icon glyphs. Names outside the set resolve to
/// [`IconGlyph::Help`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    Add,
    ArrowBack,
    ArrowForward,
    Check,
    Close,
    Delete,
    Edit,
    Favorite,
    Home,
    Info,
    Menu,
    Person,
    Search,
    Settings,
    Share,
    Star,
    Warning,
    Help,
}

impl IconGlyph {
    /// Looks an icon name up in the glyph table.
    pub fn from_name(name: &str) -> Option<IconGlyph> {
        let glyph = match name.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "add" => IconGlyph::Add,
            "arrowback" | "back" => IconGlyph::ArrowBack,
            "arrowforward" | "forward" => IconGlyph::ArrowForward,
            "check" | "done" => IconGlyph::Check,
            "close" => IconGlyph::Close,
            "delete" => IconGlyph::Delete,
            "edit" => IconGlyph::Edit,
            "favorite" => IconGlyph::Favorite,
            "home" => IconGlyph::Home,
            "info" => IconGlyph::Info,
            "menu" => IconGlyph::Menu,
            "person" => IconGlyph::Person,
            "search" => IconGlyph::Search,
            "settings" => IconGlyph::Settings,
            "share" => IconGlyph::Share,
            "star" => IconGlyph::Star,
            "warning" => IconGlyph::Warning,
            "help" => IconGlyph::Help,
            _ => return None,
        };
        Some(glyph)
    }
}

/// A node in the composed widget tree.
///
/// Ownership is strictly tree-shaped: children are owned by their parent and
/// carry no reference back to the config that produced them.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    /// A single styled text run.
    Text {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
        #[serde(skip_serializing_if = "Option::is_none")]
        align: Option<TextAlign>,
    },
    /// A sequence of differently styled spans rendered as one block.
    RichText { spans: Vec<TextSpan>, align: TextAlign },
    Button {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<Action>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
    },
    Image {
        source: ImageSource,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fit: Option<BoxFit>,
    },
    Icon {
        glyph: IconGlyph,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    /// A multi-child container laying children out along one axis; the
    /// composed form of both `column` and `row` nodes.
    Flex {
        axis: Axis,
        #[serde(rename = "mainAxisAlignment")]
        main_axis_alignment: MainAxisAlignment,
        #[serde(rename = "crossAxisAlignment")]
        cross_axis_alignment: CrossAxisAlignment,
        #[serde(rename = "mainAxisSize")]
        main_axis_size: MainAxisSize,
        children: Vec<Widget>,
    },
    /// A generic decorated box around zero or one child.
    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        child: Option<Box<Widget>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        padding: Option<EdgeInsets>,
        #[serde(skip_serializing_if = "Option::is_none")]
        margin: Option<EdgeInsets>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        #[serde(rename = "borderRadius", skip_serializing_if = "Option::is_none")]
        border_radius: Option<f32>,
    },
    Center {
        #[serde(skip_serializing_if = "Option::is_none")]
        child: Option<Box<Widget>>,
    },
    SizedBox {
        #[serde(skip_serializing_if = "Option::is_none")]
        child: Option<Box<Widget>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
    },
    Card {
        #[serde(skip_serializing_if = "Option::is_none")]
        child: Option<Box<Widget>>,
        elevation: f32,
        padding: EdgeInsets,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    /// A text input. The composed widget carries the seeded value; edits
    /// flow back through the host's state store, never through this tree.
    TextField {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
        value: String,
        #[serde(rename = "stateKey", skip_serializing_if = "Option::is_none")]
        state_key: Option<String>,
    },
    Checkbox {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        checked: bool,
        #[serde(rename = "stateKey", skip_serializing_if = "Option::is_none")]
        state_key: Option<String>,
    },
    /// A selection of string options; `selected` indexes into `options`.
    Dropdown {
        options: Vec<String>,
        selected: usize,
        #[serde(rename = "stateKey", skip_serializing_if = "Option::is_none")]
        state_key: Option<String>,
    },
    ListView {
        #[serde(rename = "shrinkWrap")]
        shrink_wrap: bool,
        children: Vec<Widget>,
    },
    Divider {
        #[serde(skip_serializing_if = "Option::is_none")]
        thickness: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        #[serde(skip_serializing_if = "Option::is_none")]
        indent: Option<f32>,
    },
    /// An inline error marker substituted for a node that failed to build.
    /// Hosts display it like any other widget.
    Error { message: String },
}

impl Widget {
    /// Builds the inline error marker used wherever a node is contained
    /// rather than propagated.
    pub fn error(message: impl Into<String>) -> Widget {
        Widget::Error { message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Widget::Error { .. })
    }

    /// The diagnostic carried by an error node, if this is one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Widget::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Returns a string identifier for the widget type, used for diagnostics
    /// and tree dumps. `Flex` reports as the node type that produced it.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Text { .. } => "text",
            Widget::RichText { .. } => "richText",
            Widget::Button { .. } => "button",
            Widget::Image { .. } => "image",
            Widget::Icon { .. } => "icon",
            Widget::Flex { axis: Axis::Vertical, .. } => "column",
            Widget::Flex { axis: Axis::Horizontal, .. } => "row",
            Widget::Container { .. } => "container",
            Widget::Center { .. } => "center",
            Widget::SizedBox { .. } => "sizedBox",
            Widget::Card { .. } => "card",
            Widget::TextField { .. } => "textField",
            Widget::Checkbox { .. } => "checkbox",
            Widget::Dropdown { .. } => "dropdown",
            Widget::ListView { .. } => "listView",
            Widget::Divider { .. } => "divider",
            Widget::Error { .. } => "error",
        }
    }

    /// All direct children, whether the widget holds a child slot or a list.
    pub fn children(&self) -> Vec<&Widget> {
        match self {
            Widget::Flex { children, .. } | Widget::ListView { children, .. } => {
                children.iter().collect()
            }
            Widget::Container { child, .. }
            | Widget::Center { child }
            | Widget::SizedBox { child, .. }
            | Widget::Card { child, .. } => child.as_deref().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// The square the host should reserve when an image fails to load:
    /// the declared size where present, otherwise [`PLACEHOLDER_EDGE`].
    /// `None` for non-image widgets.
    pub fn placeholder_size(&self) -> Option<(f32, f32)> {
        match self {
            Widget::Image { width, height, .. } => Some((
                width.unwrap_or(PLACEHOLDER_EDGE),
                height.unwrap_or(PLACEHOLDER_EDGE),
            )),
            _ => None,
        }
    }
}
