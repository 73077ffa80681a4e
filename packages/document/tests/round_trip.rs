//! Save-shape → load-shape round trips
//!
//! A document flattened to sections and loaded back must keep its node order
//! and (type, props) pairs. Ids are regenerated on load.

use pageforge_document::{sections, ContentBlockNode, Document, IdGenerator, Props};
use serde_json::{json, Value};

fn props(value: Value) -> Props {
    value.as_object().cloned().unwrap()
}

fn pairs(doc: &Document) -> Vec<(String, Props)> {
    doc.nodes()
        .map(|node| (node.block_type().to_string(), node.props().clone()))
        .collect()
}

#[test]
fn test_round_trip_preserves_order_and_content() {
    let doc = Document::from_nodes([
        ContentBlockNode::new(
            "a",
            "navigation",
            props(json!({ "logo": "Acme", "links": [{ "label": "Home", "href": "/" }] })),
        ),
        ContentBlockNode::new("b", "hero", props(json!({ "title": "Welcome", "subtitle": "Shop now" }))),
        ContentBlockNode::new(
            "c",
            "products",
            props(json!({ "items": [{ "name": "Mug", "price": 12.5, "image": "mug.png" }] })),
        ),
        ContentBlockNode::new("d", "footer", Props::new()),
    ])
    .unwrap();

    let saved = sections::to_value(&doc);
    let text = serde_json::to_string(&saved).unwrap();
    let reparsed: Value = serde_json::from_str(&text).unwrap();

    let mut ids = IdGenerator::new("round-trip");
    let loaded = sections::from_value(&reparsed, &mut ids);

    assert_eq!(pairs(&loaded), pairs(&doc));
}

#[test]
fn test_round_trip_of_empty_document() {
    let doc = Document::new();
    let mut ids = IdGenerator::new("empty");
    let loaded = sections::from_value(&sections::to_value(&doc), &mut ids);
    assert!(loaded.is_empty());
}

#[test]
fn test_loaded_ids_are_unique_and_unreserved() {
    let mut ids = IdGenerator::new("home");
    let doc = sections::from_value(
        &json!([{ "type": "hero" }, { "type": "hero" }, { "type": "hero" }]),
        &mut ids,
    );

    let mut seen = doc.ids();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|id| !id.is_reserved()));
}
