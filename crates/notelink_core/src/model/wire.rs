//! Editor JSON codec for the document tree.
//!
//! # Responsibility
//! - Map the editor's `{type, attrs, content, text, marks}` JSON onto
//!   `RichNode` and back.
//! - Reject shapes that break leaf invariants.
//!
//! # Invariants
//! - Missing or mistyped attributes degrade to defaults, never to errors.
//! - Leaf kinds (`text`, `noteLink`, `image`, `hardBreak`) must not carry
//!   non-empty `content`.
//! - Documents are written with type `doc`; `document` is accepted on read.

use crate::model::node::{ContainerKind, RichNode};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_HEADING_LEVEL: u64 = 6;

/// Raw editor JSON node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireNode {
    /// Serialized as `type` to match the editor schema.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<WireNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Value>,
}

/// Errors from decoding editor JSON into a document tree.
#[derive(Debug)]
pub enum DocumentError {
    /// Node has an empty or missing `type`.
    MissingType,
    /// Leaf kind carries child nodes.
    LeafWithContent(String),
    /// Input is not valid JSON for the editor schema.
    Json(serde_json::Error),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingType => write!(f, "document node is missing `type`"),
            Self::LeafWithContent(kind) => {
                write!(f, "`{kind}` node must not have content")
            }
            Self::Json(err) => write!(f, "invalid document json: {err}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decodes an editor JSON string into a document tree.
pub fn document_from_json(json: &str) -> Result<RichNode, DocumentError> {
    serde_json::from_str::<RichNode>(json).map_err(|err| {
        warn!(
            "event=document_decode module=wire status=error line={} column={}",
            err.line(),
            err.column()
        );
        DocumentError::Json(err)
    })
}

/// Encodes a document tree as editor JSON.
pub fn document_to_json(document: &RichNode) -> Result<String, DocumentError> {
    Ok(serde_json::to_string(document)?)
}

impl TryFrom<WireNode> for RichNode {
    type Error = DocumentError;

    fn try_from(value: WireNode) -> Result<Self, Self::Error> {
        let WireNode {
            kind,
            attrs,
            content,
            text,
            marks,
        } = value;
        let attrs = attrs.unwrap_or_default();

        let is_leaf = matches!(
            kind.as_str(),
            "text" | "noteLink" | "image" | "hardBreak"
        );
        if is_leaf && content.as_ref().is_some_and(|children| !children.is_empty()) {
            return Err(DocumentError::LeafWithContent(kind));
        }

        let node = match kind.as_str() {
            "" => return Err(DocumentError::MissingType),
            "text" => RichNode::Text {
                text: text.unwrap_or_default(),
                marks,
            },
            "noteLink" => RichNode::NoteLink {
                note_name: string_attr(&attrs, "noteName"),
            },
            "image" => RichNode::Image {
                src: string_attr(&attrs, "src"),
                alt: string_attr(&attrs, "alt"),
            },
            "hardBreak" => RichNode::HardBreak,
            _ => RichNode::Container {
                kind: container_kind(&kind, attrs),
                content: content
                    .map(|children| {
                        children
                            .into_iter()
                            .map(RichNode::try_from)
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()?,
            },
        };
        Ok(node)
    }
}

impl From<RichNode> for WireNode {
    fn from(value: RichNode) -> Self {
        match value {
            RichNode::Text { text, marks } => WireNode {
                kind: "text".to_string(),
                text: Some(text),
                marks,
                ..WireNode::default()
            },
            RichNode::NoteLink { note_name } => WireNode {
                kind: "noteLink".to_string(),
                attrs: Some(attrs_of([("noteName", Value::String(note_name))])),
                ..WireNode::default()
            },
            RichNode::Image { src, alt } => WireNode {
                kind: "image".to_string(),
                attrs: Some(attrs_of([
                    ("src", Value::String(src)),
                    ("alt", Value::String(alt)),
                ])),
                ..WireNode::default()
            },
            RichNode::HardBreak => WireNode {
                kind: "hardBreak".to_string(),
                ..WireNode::default()
            },
            RichNode::Container { kind, content } => {
                let name = kind.type_name().to_string();
                WireNode {
                    kind: name,
                    attrs: container_attrs(kind),
                    content: content
                        .map(|children| children.into_iter().map(WireNode::from).collect()),
                    ..WireNode::default()
                }
            }
        }
    }
}

fn container_kind(name: &str, attrs: Map<String, Value>) -> ContainerKind {
    match name {
        "doc" | "document" => ContainerKind::Document,
        "paragraph" => ContainerKind::Paragraph,
        "heading" => ContainerKind::Heading {
            level: attrs
                .get("level")
                .and_then(Value::as_u64)
                .filter(|level| (1..=MAX_HEADING_LEVEL).contains(level))
                .and_then(|level| u8::try_from(level).ok()),
        },
        "bulletList" => ContainerKind::BulletList,
        "orderedList" => ContainerKind::OrderedList {
            start: attrs
                .get("start")
                .and_then(Value::as_u64)
                .and_then(|start| u32::try_from(start).ok()),
        },
        "listItem" => ContainerKind::ListItem,
        "codeBlock" => ContainerKind::CodeBlock {
            language: attrs
                .get("language")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        "blockquote" => ContainerKind::Blockquote,
        _ => ContainerKind::Other {
            name: name.to_string(),
            attrs,
        },
    }
}

fn container_attrs(kind: ContainerKind) -> Option<Map<String, Value>> {
    match kind {
        ContainerKind::Heading { level: Some(level) } => {
            Some(attrs_of([("level", Value::from(level))]))
        }
        ContainerKind::OrderedList { start: Some(start) } => {
            Some(attrs_of([("start", Value::from(start))]))
        }
        ContainerKind::CodeBlock {
            language: Some(language),
        } => Some(attrs_of([("language", Value::String(language))])),
        ContainerKind::Other { attrs, .. } if !attrs.is_empty() => Some(attrs),
        _ => None,
    }
}

fn string_attr(attrs: &Map<String, Value>, key: &str) -> String {
    attrs
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn attrs_of<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
