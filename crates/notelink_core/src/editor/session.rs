//! Editor-side synchronization between markdown content and the document.
//!
//! # Responsibility
//! - Push externally loaded markdown into the editing surface.
//! - Turn user edits on the surface into markdown.
//!
//! # Invariants
//! - While a programmatic update is in flight, change notifications produce
//!   no markdown.
//! - Loading content that serializes to the surface's current markdown for
//!   the same note never touches the surface.

use crate::link::NoteId;
use crate::markdown::{parse_markdown, to_markdown};
use crate::model::node::RichNode;
use log::debug;

/// Rich-text editing surface the session drives.
pub trait EditorSurface {
    /// Current document tree.
    fn document(&self) -> RichNode;
    /// Replaces the document tree. May emit change notifications.
    fn set_document(&mut self, document: RichNode);
}

/// Result of `EditorSession::sync_content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Same note, same markdown: the surface was left alone.
    Unchanged,
    /// The surface received a freshly parsed document.
    Replaced,
}

/// Glue between one editing surface and the note content it shows.
pub struct EditorSession<S: EditorSurface> {
    surface: S,
    note_id: Option<NoteId>,
    updating: bool,
}

impl<S: EditorSurface> EditorSession<S> {
    /// Wraps a surface that currently shows `note_id`.
    pub fn new(surface: S, note_id: Option<NoteId>) -> Self {
        Self {
            surface,
            note_id,
            updating: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct surface access for user edits.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn note_id(&self) -> Option<NoteId> {
        self.note_id
    }

    /// Whether a programmatic update has not been finished yet.
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Markdown of the surface document.
    pub fn current_markdown(&self) -> String {
        to_markdown(&self.surface.document())
    }

    /// Handles a change notification from the surface.
    ///
    /// Returns the markdown to store, or `None` when the change came from our
    /// own `sync_content`.
    pub fn handle_change(&mut self) -> Option<String> {
        if self.updating {
            debug!("event=editor_change module=editor status=suppressed");
            return None;
        }
        Some(self.current_markdown())
    }

    /// Loads `content` for `note_id` into the surface unless nothing changed.
    ///
    /// On `Replaced` the session stays in updating mode until
    /// `finish_programmatic_update` is called.
    pub fn sync_content(&mut self, note_id: Option<NoteId>, content: &str) -> SyncOutcome {
        let note_changed = self.note_id != note_id;
        if !note_changed && self.current_markdown() == content.trim() {
            debug!("event=editor_sync module=editor status=unchanged");
            return SyncOutcome::Unchanged;
        }

        self.note_id = note_id;
        self.updating = true;
        self.surface.set_document(parse_markdown(content));
        debug!(
            "event=editor_sync module=editor status=replaced note_changed={}",
            note_changed
        );
        SyncOutcome::Replaced
    }

    /// Ends updating mode once queued surface notifications were drained.
    pub fn finish_programmatic_update(&mut self) {
        self.updating = false;
    }

    /// Unwraps the session.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
