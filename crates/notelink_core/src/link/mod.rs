//! Note-link helpers around the converter.
//!
//! # Responsibility
//! - Turn literal `[[Name]]` text into note-link atoms and list link names.
//! - Resolve a followed link to a known note and build link suggestions.
//!
//! # See also
//! - `markdown` for the `[[Name]]` wire syntax.

pub mod atomize;
pub mod resolve;

pub use atomize::{atomize_note_links, display_title, extract_note_links};
pub use resolve::{
    resolve_note_link, suggest_note_links, FolderId, FolderRef, LinkSuggestion, LinkTarget, NoteId,
    NoteRef, SuggestionTarget, MAX_LINK_SUGGESTIONS, NEW_NOTE_LABEL,
};
