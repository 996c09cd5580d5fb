//! Markdown to document tree.
//!
//! # Invariants
//! - Every non-blank `\n\n`-delimited block becomes exactly one paragraph.
//! - Note links and images are found in one left-to-right pass; matches never
//!   overlap and the earliest start wins.
//! - No empty text node is ever emitted.
//! - The result always holds at least one paragraph.

use crate::model::node::RichNode;
use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const BLOCK_SEPARATOR: &str = "\n\n";

static INLINE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<src>[^)]+)\)|\[\[(?P<note>[^\]]+)\]\]")
        .expect("valid inline token regex")
});

/// Parses markdown into a `doc` node of paragraphs.
///
/// Blank input yields one paragraph without content so the editor always has
/// something to mount.
pub fn parse_markdown(markdown: &str) -> RichNode {
    let mut blocks = markdown
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .map(|block| RichNode::paragraph(parse_inline(block)))
        .collect::<Vec<_>>();

    if blocks.is_empty() {
        blocks.push(RichNode::empty_paragraph());
    }

    trace!(
        "event=markdown_parse module=markdown status=ok blocks={}",
        blocks.len()
    );
    RichNode::document(blocks)
}

/// Splits one block into text runs and note-link/image atoms.
pub fn parse_inline(block: &str) -> Vec<RichNode> {
    let mut children = Vec::new();
    let mut cursor = 0;

    for captures in INLINE_TOKEN_RE.captures_iter(block) {
        let Some(token) = captures.get(0) else {
            continue;
        };
        if token.start() > cursor {
            children.push(RichNode::text(&block[cursor..token.start()]));
        }
        children.push(token_node(&captures));
        cursor = token.end();
    }

    if cursor < block.len() {
        children.push(RichNode::text(&block[cursor..]));
    }
    children
}

fn token_node(captures: &Captures<'_>) -> RichNode {
    if let Some(note) = captures.name("note") {
        return RichNode::note_link(note.as_str());
    }
    RichNode::image(group_str(captures, "src"), group_str(captures, "alt"))
}

fn group_str<'h>(captures: &Captures<'h>, name: &str) -> &'h str {
    captures.name(name).map_or("", |m| m.as_str())
}
