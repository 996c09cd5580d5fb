use notelink_core::{
    atomize_note_links, extract_note_links, parse_markdown, resolve_note_link,
    suggest_note_links, to_markdown, FolderRef, LinkSuggestion, LinkTarget, NoteRef, RichNode,
    SuggestionTarget,
};

fn note(id: i64, title: &str, file_path: &str, parent_id: Option<i64>) -> NoteRef {
    NoteRef {
        id,
        title: title.to_string(),
        file_path: file_path.to_string(),
        parent_id,
    }
}

fn fixture_notes() -> Vec<NoteRef> {
    vec![
        note(1, "Alpha", "notes/Alpha.md", None),
        note(2, "Alpha", r"notes\Work\Alpha.md", Some(10)),
        note(3, "Beta", "notes/Work/Beta.md", Some(10)),
        note(4, "alphabet soup", "notes/alphabet soup.md", None),
    ]
}

fn fixture_folders() -> Vec<FolderRef> {
    vec![FolderRef {
        id: 10,
        name: "Work".to_string(),
    }]
}

#[test]
fn plain_name_resolves_first_title_match() {
    let notes = fixture_notes();
    assert_eq!(
        resolve_note_link("Alpha", &notes),
        LinkTarget::Existing(&notes[0])
    );
}

#[test]
fn path_name_matches_suffix_with_or_without_extension() {
    let notes = fixture_notes();
    assert_eq!(
        resolve_note_link("Work/Alpha", &notes),
        LinkTarget::Existing(&notes[1])
    );
    assert_eq!(
        resolve_note_link(r"Work\Beta.md", &notes),
        LinkTarget::Existing(&notes[2])
    );
}

#[test]
fn unknown_name_asks_for_creation() {
    let notes = fixture_notes();
    assert_eq!(
        resolve_note_link("Gamma", &notes),
        LinkTarget::Create {
            title: "Gamma".to_string()
        }
    );
}

#[test]
fn suggestions_filter_case_insensitively_and_label_folders() {
    let suggestions = suggest_note_links("alp", &fixture_notes(), &fixture_folders());
    assert_eq!(
        suggestions,
        vec![
            LinkSuggestion {
                title: "Alpha".to_string(),
                path: String::new(),
                target: SuggestionTarget::Note(1),
            },
            LinkSuggestion {
                title: "Alpha".to_string(),
                path: "Work".to_string(),
                target: SuggestionTarget::Note(2),
            },
            LinkSuggestion {
                title: "alphabet soup".to_string(),
                path: String::new(),
                target: SuggestionTarget::Note(4),
            },
            LinkSuggestion {
                title: "alp".to_string(),
                path: "New Note".to_string(),
                target: SuggestionTarget::New,
            },
        ]
    );
}

#[test]
fn exact_root_title_suppresses_create_row() {
    let suggestions = suggest_note_links("Alpha", &fixture_notes(), &fixture_folders());
    assert!(suggestions
        .iter()
        .all(|suggestion| suggestion.target != SuggestionTarget::New));
}

#[test]
fn exact_title_only_in_folder_still_offers_create() {
    let suggestions = suggest_note_links("Beta", &fixture_notes(), &fixture_folders());
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[1].target, SuggestionTarget::New);
    assert_eq!(suggestions[1].title, "Beta");
}

#[test]
fn suggestions_cap_at_five_plus_create() {
    let notes = (0..8)
        .map(|idx| note(idx, &format!("Daily {idx}"), &format!("d/{idx}.md"), None))
        .collect::<Vec<_>>();
    let suggestions = suggest_note_links("daily", &notes, &[]);
    assert_eq!(suggestions.len(), 6);
    assert_eq!(suggestions[5].target, SuggestionTarget::New);
}

#[test]
fn empty_query_without_notes_offers_generic_create() {
    assert_eq!(
        suggest_note_links("", &[], &[]),
        vec![LinkSuggestion {
            title: "New Note".to_string(),
            path: String::new(),
            target: SuggestionTarget::New,
        }]
    );
}

#[test]
fn atomized_links_serialize_without_duplicate_brackets() {
    let mut document = RichNode::document(vec![RichNode::paragraph(vec![
        RichNode::text("typed [[Roadmap]] and [[Roadmap]] again"),
    ])]);

    assert_eq!(atomize_note_links(&mut document), 2);
    assert_eq!(extract_note_links(&document), vec!["Roadmap"]);
    assert_eq!(
        to_markdown(&document),
        "typed [[Roadmap]] and [[Roadmap]] again"
    );
}

#[test]
fn parsed_markdown_has_nothing_left_to_atomize() {
    let mut document = parse_markdown("a [[One]]\n\nb [[Two]] c");
    assert_eq!(atomize_note_links(&mut document), 0);
    assert_eq!(extract_note_links(&document), vec!["One", "Two"]);
}
