//! # Section transforms
//!
//! Conversion between a [`Document`] and the storage shape used by the
//! backend: an ordered list of flat section objects `{ type, ...props }`.
//!
//! Loading is permissive. Externally produced documents (often generated)
//! don't follow a fixed schema, so anything that is not a section object is
//! skipped with a warning rather than failing the whole load.

use crate::{ContentBlockNode, Document, IdGenerator, Props};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Type given to sections that carry no usable `type` field
pub const DEFAULT_SECTION_TYPE: &str = "section";

/// Build a document from `{ "sections": [...] }` or a bare section array.
///
/// Every node receives a fresh id from `ids`.
pub fn from_value(value: &Value, ids: &mut IdGenerator) -> Document {
    let sections: &[Value] = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("sections") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                warn!(found = %kind_of(other), "`sections` is not an array, treating as empty");
                &[]
            }
            None => {
                debug!("document has no `sections` field");
                &[]
            }
        },
        other => {
            warn!(found = %kind_of(other), "document is neither an object nor an array");
            &[]
        }
    };

    from_sections(sections, ids)
}

/// Build a document from a list of section objects
pub fn from_sections(sections: &[Value], ids: &mut IdGenerator) -> Document {
    let mut doc = Document::new();

    for (index, section) in sections.iter().enumerate() {
        let Some(fields) = section.as_object() else {
            warn!(index, found = %kind_of(section), "skipping non-object section");
            continue;
        };

        let node = section_to_node(fields, ids, &doc);
        // Ids come from the generator and are checked against the document,
        // so a push can only fail on a corrupted generator seed.
        if let Err(err) = doc.push(node) {
            warn!(index, error = %err, "skipping section");
        }
    }

    doc
}

fn section_to_node(fields: &Map<String, Value>, ids: &mut IdGenerator, doc: &Document) -> ContentBlockNode {
    let block_type = match fields.get("type") {
        Some(Value::String(label)) => label.clone(),
        Some(other) => {
            warn!(found = %kind_of(other), "section type is not a string, using default");
            DEFAULT_SECTION_TYPE.to_string()
        }
        None => DEFAULT_SECTION_TYPE.to_string(),
    };

    let props: Props = fields
        .iter()
        .filter(|(key, _)| key.as_str() != "type")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let id = ids.new_unique_id(|candidate| doc.contains(candidate));
    ContentBlockNode::new(id, block_type, props)
}

/// Flatten one node into `{ type, ...props }`
pub fn node_to_section(node: &ContentBlockNode) -> Value {
    let mut section = node.props().clone();
    section.insert("type".to_string(), Value::String(node.block_type().to_string()));
    Value::Object(section)
}

/// The ordered list of flattened sections
pub fn to_sections(doc: &Document) -> Vec<Value> {
    doc.nodes().map(node_to_section).collect()
}

/// The full storage shape `{ "sections": [...] }`
pub fn to_value(doc: &Document) -> Value {
    let mut root = Map::new();
    root.insert("sections".to_string(), Value::Array(to_sections(doc)));
    Value::Object(root)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_maps_sections_one_to_one() {
        let mut ids = IdGenerator::from_seed("t");
        let doc = from_value(
            &json!({
                "sections": [
                    { "type": "navbar", "logo": "Shop", "links": [] },
                    { "title": "Untyped" }
                ]
            }),
            &mut ids,
        );

        assert_eq!(doc.len(), 2);
        let first = doc.at(0).unwrap();
        assert_eq!(first.block_type(), "navbar");
        assert_eq!(first.prop("logo"), Some(&json!("Shop")));
        assert!(first.prop("type").is_none());

        let second = doc.at(1).unwrap();
        assert_eq!(second.block_type(), DEFAULT_SECTION_TYPE);
        assert_eq!(second.prop("title"), Some(&json!("Untyped")));
    }

    #[test]
    fn test_load_accepts_bare_array() {
        let mut ids = IdGenerator::from_seed("t");
        let doc = from_value(&json!([{ "type": "hero" }, { "type": "footer" }]), &mut ids);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_load_is_permissive() {
        let mut ids = IdGenerator::from_seed("t");

        assert!(from_value(&json!({ "sections": "oops" }), &mut ids).is_empty());
        assert!(from_value(&json!({}), &mut ids).is_empty());
        assert!(from_value(&json!(42), &mut ids).is_empty());

        let doc = from_value(&json!({ "sections": [1, null, { "type": 7, "title": "x" }] }), &mut ids);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.at(0).unwrap().block_type(), DEFAULT_SECTION_TYPE);
    }

    #[test]
    fn test_save_flattens_nodes() {
        let mut ids = IdGenerator::from_seed("t");
        let doc = from_value(&json!([{ "type": "hero", "title": "Hi" }]), &mut ids);

        assert_eq!(to_value(&doc), json!({ "sections": [{ "type": "hero", "title": "Hi" }] }));
    }
}
