//! Tree passes over note-link atoms.
//!
//! # Invariants
//! - Atomizing never touches code blocks.
//! - Text split around a new atom keeps the original marks on every piece.
//! - `extract_note_links` reports each name once, in document order.

use crate::model::node::{ContainerKind, RichNode};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NOTE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid note link regex"));

/// Replaces literal `[[Name]]` text with note-link atoms, in place.
///
/// Returns how many atoms were created.
pub fn atomize_note_links(node: &mut RichNode) -> usize {
    let created = atomize_in(node);
    if created > 0 {
        debug!("event=note_links_atomized module=link status=ok count={created}");
    }
    created
}

fn atomize_in(node: &mut RichNode) -> usize {
    let RichNode::Container {
        kind,
        content: Some(children),
    } = node
    else {
        return 0;
    };
    if matches!(kind, ContainerKind::CodeBlock { .. }) {
        return 0;
    }

    let mut created = 0;
    let mut rebuilt = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match child {
            RichNode::Text { text, marks } if NOTE_LINK_RE.is_match(&text) => {
                let mut cursor = 0;
                for captures in NOTE_LINK_RE.captures_iter(&text) {
                    let (Some(token), Some(name)) = (captures.get(0), captures.get(1)) else {
                        continue;
                    };
                    if token.start() > cursor {
                        rebuilt.push(RichNode::Text {
                            text: text[cursor..token.start()].to_string(),
                            marks: marks.clone(),
                        });
                    }
                    rebuilt.push(RichNode::note_link(name.as_str()));
                    created += 1;
                    cursor = token.end();
                }
                if cursor < text.len() {
                    rebuilt.push(RichNode::Text {
                        text: text[cursor..].to_string(),
                        marks,
                    });
                }
            }
            mut other => {
                created += atomize_in(&mut other);
                rebuilt.push(other);
            }
        }
    }
    *children = rebuilt;
    created
}

/// Collects linked note names, first occurrence only.
pub fn extract_note_links(node: &RichNode) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    collect_links(node, &mut seen, &mut names);
    names
}

fn collect_links(node: &RichNode, seen: &mut HashSet<String>, names: &mut Vec<String>) {
    match node {
        RichNode::NoteLink { note_name } => {
            if seen.insert(note_name.clone()) {
                names.push(note_name.clone());
            }
        }
        RichNode::Container { .. } => {
            for child in node.children() {
                collect_links(child, seen, names);
            }
        }
        RichNode::Text { .. } | RichNode::Image { .. } | RichNode::HardBreak => {}
    }
}

/// Title shown for a link: the last `/` or `\` segment of its name.
pub fn display_title(note_name: &str) -> &str {
    note_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(note_name)
}
