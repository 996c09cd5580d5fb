//! Rich-text document tree model.
//!
//! # Responsibility
//! - Define the editor document tree as a closed sum type.
//! - Provide constructors used by the parser and by tests.
//!
//! # Invariants
//! - `Text`, `NoteLink`, `Image` and `HardBreak` are leaves and never carry
//!   children.
//! - `Container::content == None` means "no content array", which is not the
//!   same as an empty one.
//!
//! # See also
//! - `model::wire` for the editor JSON shape.

use crate::model::wire::WireNode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of the rich-text editor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireNode", into = "WireNode")]
pub enum RichNode {
    /// Inline text run. Marks (bold, italic, ...) are kept opaque.
    Text { text: String, marks: Vec<Value> },
    /// Atomic cross-reference to another note, written `[[note_name]]`.
    NoteLink { note_name: String },
    /// Atomic inline image.
    Image { src: String, alt: String },
    /// Soft line break inside a block.
    HardBreak,
    /// Any node that may hold children.
    Container {
        kind: ContainerKind,
        content: Option<Vec<RichNode>>,
    },
}

/// Kinds of nodes that hold children.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    Document,
    Paragraph,
    /// `level` is `None` when the editor did not provide a usable value.
    Heading { level: Option<u8> },
    BulletList,
    /// Start number is kept for the editor; markdown output ignores it.
    OrderedList { start: Option<u32> },
    ListItem,
    CodeBlock { language: Option<String> },
    Blockquote,
    /// Node type this crate does not know yet. Attributes round-trip as-is.
    Other {
        name: String,
        attrs: Map<String, Value>,
    },
}

impl ContainerKind {
    /// Editor type name for this kind.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Document => "doc",
            Self::Paragraph => "paragraph",
            Self::Heading { .. } => "heading",
            Self::BulletList => "bulletList",
            Self::OrderedList { .. } => "orderedList",
            Self::ListItem => "listItem",
            Self::CodeBlock { .. } => "codeBlock",
            Self::Blockquote => "blockquote",
            Self::Other { name, .. } => name.as_str(),
        }
    }
}

impl RichNode {
    /// Unmarked text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn note_link(note_name: impl Into<String>) -> Self {
        Self::NoteLink {
            note_name: note_name.into(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Container with a present (possibly empty) content array.
    pub fn container(kind: ContainerKind, content: Vec<RichNode>) -> Self {
        Self::Container {
            kind,
            content: Some(content),
        }
    }

    pub fn document(content: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::Document, content)
    }

    pub fn paragraph(content: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::Paragraph, content)
    }

    /// Paragraph without a content array; the minimal mountable block.
    pub fn empty_paragraph() -> Self {
        Self::Container {
            kind: ContainerKind::Paragraph,
            content: None,
        }
    }

    pub fn heading(level: u8, content: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::Heading { level: Some(level) }, content)
    }

    pub fn bullet_list(items: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::BulletList, items)
    }

    pub fn ordered_list(items: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::OrderedList { start: None }, items)
    }

    pub fn list_item(content: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::ListItem, content)
    }

    pub fn code_block(content: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::CodeBlock { language: None }, content)
    }

    pub fn blockquote(content: Vec<RichNode>) -> Self {
        Self::container(ContainerKind::Blockquote, content)
    }

    /// Editor type name of this node.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::NoteLink { .. } => "noteLink",
            Self::Image { .. } => "image",
            Self::HardBreak => "hardBreak",
            Self::Container { kind, .. } => kind.type_name(),
        }
    }

    /// Children of a container; empty for leaves and absent content.
    pub fn children(&self) -> &[RichNode] {
        match self {
            Self::Container {
                content: Some(children),
                ..
            } => children.as_slice(),
            _ => &[],
        }
    }

    /// Returns whether this node is a note-link atom.
    pub fn is_note_link(&self) -> bool {
        matches!(self, Self::NoteLink { .. })
    }

    /// Returns the text if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}
