//! Note-link markdown conversion for the notes editor.
//! This crate owns the document model, the markdown converter and the
//! editor-side helpers built on them.

pub mod editor;
pub mod link;
pub mod logging;
pub mod markdown;
pub mod model;

pub use editor::{EditorSession, EditorSurface, SyncOutcome};
pub use link::{
    atomize_note_links, display_title, extract_note_links, resolve_note_link, suggest_note_links,
    FolderRef, LinkSuggestion, LinkTarget, NoteId, NoteRef, SuggestionTarget,
};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use markdown::{parse_markdown, render_node, to_markdown};
pub use model::node::{ContainerKind, RichNode};
pub use model::wire::{document_from_json, document_to_json, DocumentError, WireNode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
