//! Document tree to markdown.
//!
//! # Invariants
//! - Rendering is total: missing attributes render as empty strings.
//! - Bracket artifacts are filtered against immediate siblings only.
//! - The public entry point trims exactly once, at the top.

use crate::model::node::{ContainerKind, RichNode};
use log::trace;

const NOTE_LINK_OPEN: &str = "[[";
const NOTE_LINK_CLOSE: &str = "]]";
const CODE_FENCE: &str = "```";

/// Serializes a full document to markdown, trimmed once at the end.
pub fn to_markdown(document: &RichNode) -> String {
    let markdown = render_node(document).trim().to_string();
    trace!(
        "event=markdown_serialize module=markdown status=ok bytes={}",
        markdown.len()
    );
    markdown
}

/// Renders one node without trimming.
///
/// Block nodes keep their trailing newlines, so `heading` over "Title"
/// renders as `"# Title\n\n"`.
pub fn render_node(node: &RichNode) -> String {
    match node {
        RichNode::Text { text, .. } => text.clone(),
        RichNode::NoteLink { note_name } => {
            format!("{NOTE_LINK_OPEN}{note_name}{NOTE_LINK_CLOSE}")
        }
        RichNode::Image { src, alt } => format!("![{alt}]({src})"),
        RichNode::HardBreak => "\n".to_string(),
        RichNode::Container {
            content: None, ..
        } => String::new(),
        RichNode::Container {
            kind,
            content: Some(children),
        } => wrap_container(kind, render_children(children)),
    }
}

fn render_children(children: &[RichNode]) -> String {
    let mut rendered = String::new();
    for index in 0..children.len() {
        if is_bracket_artifact(children, index) {
            continue;
        }
        rendered.push_str(&render_node(&children[index]));
    }
    rendered
}

/// Literal `[[` right before a note-link atom, or `]]` right after one.
///
/// The editor can leave these behind when a typed token is atomized; keeping
/// them would double the brackets on output.
fn is_bracket_artifact(children: &[RichNode], index: usize) -> bool {
    match children[index].as_text() {
        Some(NOTE_LINK_OPEN) => children
            .get(index + 1)
            .is_some_and(RichNode::is_note_link),
        Some(NOTE_LINK_CLOSE) => index
            .checked_sub(1)
            .and_then(|previous| children.get(previous))
            .is_some_and(RichNode::is_note_link),
        _ => false,
    }
}

fn wrap_container(kind: &ContainerKind, content: String) -> String {
    match kind {
        ContainerKind::Paragraph => format!("{content}\n\n"),
        ContainerKind::Heading { level } => {
            let level = level.filter(|level| *level > 0).unwrap_or(1);
            format!("{} {content}\n\n", "#".repeat(usize::from(level)))
        }
        // Items carry their own prefix.
        ContainerKind::BulletList | ContainerKind::OrderedList { .. } => content,
        // Ordered items also render with `-`; numbering is not reproduced.
        ContainerKind::ListItem => format!("- {}\n", content.trim()),
        ContainerKind::CodeBlock { .. } => format!("{CODE_FENCE}\n{content}{CODE_FENCE}\n\n"),
        ContainerKind::Blockquote => format!("> {}\n\n", content.trim()),
        ContainerKind::Document | ContainerKind::Other { .. } => content,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_bracket_artifact, render_node, to_markdown};
    use crate::model::node::{ContainerKind, RichNode};

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(render_node(&RichNode::text("Hello World")), "Hello World");
    }

    #[test]
    fn paragraph_gets_blank_line() {
        let node = RichNode::paragraph(vec![RichNode::text("Hello World")]);
        assert_eq!(render_node(&node), "Hello World\n\n");
    }

    #[test]
    fn heading_level_defaults_to_one() {
        let unset = RichNode::Container {
            kind: ContainerKind::Heading { level: None },
            content: Some(vec![RichNode::text("Title")]),
        };
        assert_eq!(render_node(&unset), "# Title\n\n");

        let zero = RichNode::heading(0, vec![RichNode::text("Title")]);
        assert_eq!(render_node(&zero), "# Title\n\n");
    }

    #[test]
    fn code_block_keeps_content_untrimmed() {
        let node = RichNode::code_block(vec![RichNode::text("const x = 1;")]);
        assert_eq!(render_node(&node), "```\nconst x = 1;```\n\n");

        let padded = RichNode::code_block(vec![RichNode::text("  a\n")]);
        assert_eq!(render_node(&padded), "```\n  a\n```\n\n");
    }

    #[test]
    fn blockquote_trims_inner_paragraph() {
        let node = RichNode::blockquote(vec![RichNode::paragraph(vec![RichNode::text(
            "Quote text",
        )])]);
        assert_eq!(render_node(&node), "> Quote text\n\n");
    }

    #[test]
    fn hard_break_is_newline() {
        let node = RichNode::paragraph(vec![
            RichNode::text("a"),
            RichNode::HardBreak,
            RichNode::text("b"),
        ]);
        assert_eq!(render_node(&node), "a\nb\n\n");
    }

    #[test]
    fn image_with_missing_alt_renders_empty_brackets() {
        assert_eq!(render_node(&RichNode::image("a.png", "")), "![](a.png)");
    }

    #[test]
    fn container_without_content_renders_nothing() {
        assert_eq!(render_node(&RichNode::empty_paragraph()), "");
        let rule = RichNode::Container {
            kind: ContainerKind::Other {
                name: "horizontalRule".to_string(),
                attrs: Default::default(),
            },
            content: None,
        };
        assert_eq!(render_node(&rule), "");
    }

    #[test]
    fn unknown_container_passes_content_through() {
        let node = RichNode::container(
            ContainerKind::Other {
                name: "details".to_string(),
                attrs: Default::default(),
            },
            vec![RichNode::text("inner")],
        );
        assert_eq!(render_node(&node), "inner");
    }

    #[test]
    fn bracket_artifact_requires_adjacent_note_link() {
        let children = vec![
            RichNode::text("[["),
            RichNode::text("x"),
            RichNode::note_link("Note"),
            RichNode::text("]]"),
        ];
        assert!(!is_bracket_artifact(&children, 0));
        assert!(is_bracket_artifact(&children, 3));
    }

    #[test]
    fn artifact_filter_does_not_descend_into_grandchildren() {
        let node = RichNode::paragraph(vec![
            RichNode::container(
                ContainerKind::Other {
                    name: "span".to_string(),
                    attrs: Default::default(),
                },
                vec![RichNode::text("[[")],
            ),
            RichNode::note_link("Note"),
        ]);
        assert_eq!(render_node(&node), "[[[[Note]]\n\n");
    }

    #[test]
    fn to_markdown_trims_once_at_top() {
        let document = RichNode::document(vec![
            RichNode::paragraph(vec![RichNode::text("  first")]),
            RichNode::paragraph(vec![RichNode::text("second")]),
        ]);
        assert_eq!(to_markdown(&document), "first\n\nsecond");
    }
}
