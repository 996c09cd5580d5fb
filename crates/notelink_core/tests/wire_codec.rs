use notelink_core::{
    document_from_json, document_to_json, parse_markdown, to_markdown, ContainerKind,
    DocumentError, RichNode,
};
use serde_json::json;

#[test]
fn editor_json_decodes_into_tree() {
    let value = json!({
        "type": "doc",
        "content": [
            {
                "type": "heading",
                "attrs": { "level": 2 },
                "content": [{ "type": "text", "text": "Plan" }]
            },
            {
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": "ship ", "marks": [{ "type": "bold" }] },
                    { "type": "noteLink", "attrs": { "noteName": "Roadmap" } },
                    { "type": "hardBreak" },
                    { "type": "image", "attrs": { "src": "a.png", "alt": null, "title": "x" } }
                ]
            }
        ]
    });

    let document = document_from_json(&value.to_string()).unwrap();
    assert_eq!(to_markdown(&document), "## Plan\n\nship [[Roadmap]]\n![](a.png)");

    let paragraph = &document.children()[1];
    assert_eq!(
        paragraph.children()[0],
        RichNode::Text {
            text: "ship ".to_string(),
            marks: vec![json!({ "type": "bold" })],
        }
    );
}

#[test]
fn parsed_markdown_encodes_with_editor_field_names() {
    let document = parse_markdown("Check [[My Note]]");
    let json: serde_json::Value =
        serde_json::from_str(&document_to_json(&document).unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": "Check " },
                    { "type": "noteLink", "attrs": { "noteName": "My Note" } }
                ]
            }]
        })
    );
}

#[test]
fn empty_document_keeps_paragraph_without_content() {
    let json: serde_json::Value =
        serde_json::from_str(&document_to_json(&parse_markdown("")).unwrap()).unwrap();
    assert_eq!(
        json,
        json!({ "type": "doc", "content": [{ "type": "paragraph" }] })
    );
}

#[test]
fn unknown_nodes_round_trip_with_attrs() {
    let value = json!({
        "type": "taskItem",
        "attrs": { "checked": true },
        "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "done" }] }]
    });

    let node: RichNode = serde_json::from_value(value.clone()).unwrap();
    assert!(matches!(
        &node,
        RichNode::Container { kind: ContainerKind::Other { name, .. }, .. } if name == "taskItem"
    ));
    assert_eq!(serde_json::to_value(&node).unwrap(), value);
}

#[test]
fn typed_attributes_survive_round_trip() {
    let value = json!({
        "type": "doc",
        "content": [
            { "type": "orderedList", "attrs": { "start": 3 }, "content": [] },
            { "type": "codeBlock", "attrs": { "language": "rust" }, "content": [] }
        ]
    });

    let node: RichNode = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(serde_json::to_value(&node).unwrap(), value);
}

#[test]
fn document_alias_is_accepted() {
    let document = document_from_json(r#"{"type":"document","content":[]}"#).unwrap();
    assert_eq!(document, RichNode::document(vec![]));
}

#[test]
fn leaf_with_children_is_rejected() {
    let err = document_from_json(
        r#"{"type":"doc","content":[{"type":"noteLink","content":[{"type":"text","text":"x"}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
    assert!(
        err.to_string().contains("`noteLink` node must not have content"),
        "unexpected error: {err}"
    );
}

#[test]
fn missing_type_is_rejected() {
    let err = document_from_json(r#"{"content":[]}"#).unwrap_err();
    assert!(
        err.to_string().contains("missing `type`"),
        "unexpected error: {err}"
    );
}
