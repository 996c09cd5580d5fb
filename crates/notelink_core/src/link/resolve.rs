//! Note-link resolution and suggestions against known notes.
//!
//! # Invariants
//! - Path-style names (containing `/` or `\`) match on file-path suffix with
//!   separators normalized to `/`; plain names match on exact title.
//! - Suggestions hold at most `MAX_LINK_SUGGESTIONS` existing notes plus at
//!   most one create entry.

use log::debug;
use serde::{Deserialize, Serialize};

/// Backend note identifier.
pub type NoteId = i64;
/// Backend folder identifier.
pub type FolderId = i64;

/// Upper bound on existing-note suggestions.
pub const MAX_LINK_SUGGESTIONS: usize = 5;
/// Path label used on the "create note" suggestion.
pub const NEW_NOTE_LABEL: &str = "New Note";

const MARKDOWN_EXTENSION: &str = ".md";

/// Note summary as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRef {
    pub id: NoteId,
    pub title: String,
    /// Backend file path, separators as stored (may be `\` on Windows).
    pub file_path: String,
    /// Containing folder, `None` at root.
    pub parent_id: Option<FolderId>,
}

/// Folder summary as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: FolderId,
    pub name: String,
}

/// Outcome of following a note link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Open this existing note.
    Existing(&'a NoteRef),
    /// No note matched; create one with this title.
    Create { title: String },
}

/// What picking a suggestion does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTarget {
    Note(NoteId),
    New,
}

/// One row of the link suggestion popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSuggestion {
    pub title: String,
    /// Parent folder name, empty at root, or `NEW_NOTE_LABEL` for create rows.
    pub path: String,
    pub target: SuggestionTarget,
}

/// Resolves a clicked note link to a note, first match wins.
pub fn resolve_note_link<'a>(note_name: &str, notes: &'a [NoteRef]) -> LinkTarget<'a> {
    let found = if is_path_name(note_name) {
        let link_path = normalize_separators(note_name);
        let with_extension = format!("{link_path}{MARKDOWN_EXTENSION}");
        notes.iter().find(|note| {
            let note_path = normalize_separators(&note.file_path);
            note_path.ends_with(&link_path) || note_path.ends_with(&with_extension)
        })
    } else {
        notes.iter().find(|note| note.title == note_name)
    };

    match found {
        Some(note) => {
            debug!(
                "event=note_link_resolve module=link status=ok note_id={}",
                note.id
            );
            LinkTarget::Existing(note)
        }
        None => {
            debug!("event=note_link_resolve module=link status=missing");
            LinkTarget::Create {
                title: note_name.to_string(),
            }
        }
    }
}

/// Builds link suggestions for the text typed after `[[`.
///
/// Rules:
/// - titles containing `query` (case-insensitive), at most five, labelled
///   with their parent folder name;
/// - non-empty query with no exact root-level title match gets a create row
///   titled with the query;
/// - otherwise, an empty candidate list gets a generic create row.
pub fn suggest_note_links(
    query: &str,
    notes: &[NoteRef],
    folders: &[FolderRef],
) -> Vec<LinkSuggestion> {
    let needle = query.to_lowercase();
    let mut suggestions = notes
        .iter()
        .filter(|note| note.title.to_lowercase().contains(&needle))
        .take(MAX_LINK_SUGGESTIONS)
        .map(|note| LinkSuggestion {
            title: note.title.clone(),
            path: folder_name(note.parent_id, folders).to_string(),
            target: SuggestionTarget::Note(note.id),
        })
        .collect::<Vec<_>>();

    let exact_match = suggestions
        .iter()
        .any(|suggestion| suggestion.title == query && suggestion.path.is_empty());
    if !query.is_empty() && !exact_match {
        suggestions.push(LinkSuggestion {
            title: query.to_string(),
            path: NEW_NOTE_LABEL.to_string(),
            target: SuggestionTarget::New,
        });
    } else if suggestions.is_empty() {
        suggestions.push(LinkSuggestion {
            title: NEW_NOTE_LABEL.to_string(),
            path: String::new(),
            target: SuggestionTarget::New,
        });
    }
    suggestions
}

fn is_path_name(note_name: &str) -> bool {
    note_name.contains(['/', '\\'])
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn folder_name(parent_id: Option<FolderId>, folders: &[FolderRef]) -> &str {
    parent_id
        .and_then(|id| folders.iter().find(|folder| folder.id == id))
        .map_or("", |folder| folder.name.as_str())
}
