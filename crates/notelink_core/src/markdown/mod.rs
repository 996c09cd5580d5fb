//! Markdown conversion for note-link documents.
//!
//! # Responsibility
//! - Serialize editor documents to markdown with `[[Name]]` cross references.
//! - Parse markdown back into paragraphs of text, note-link and image nodes.
//!
//! # Invariants
//! - Both directions are pure and total.
//! - `to_markdown(&parse_markdown(m)) == m.trim()` whenever `m` came from
//!   `to_markdown`; the editor session relies on it to detect no-op loads.

pub mod parse;
pub mod serialize;

pub use parse::{parse_inline, parse_markdown};
pub use serialize::{render_node, to_markdown};
