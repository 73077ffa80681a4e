use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Marker that identifies palette drag sources.
///
/// No node id may start with it, so a raw drag identifier can always be told
/// apart from an existing node.
pub const PALETTE_PREFIX: &str = "palette:";

/// Visual configuration of a block
pub type Props = Map<String, Value>;

/// Collapse naming variants of a type label: lower-case, separators removed.
///
/// `"Hero-Split"`, `"hero_split"` and `"herosplit"` all normalize to
/// `"herosplit"`.
pub fn normalize_type(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Opaque node identity, stable for the node's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id collides with the palette marker
    pub fn is_reserved(&self) -> bool {
        self.0.starts_with(PALETTE_PREFIX)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One content block of a page (hero banner, navigation bar, product grid...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlockNode {
    id: NodeId,

    /// Free-form type label, only interpreted at render time
    #[serde(rename = "type")]
    block_type: String,

    #[serde(default)]
    props: Props,
}

impl ContentBlockNode {
    /// Create a node. A `type` key inside `props` is dropped; the label lives
    /// in `block_type` only.
    pub fn new(id: impl Into<NodeId>, block_type: impl Into<String>, mut props: Props) -> Self {
        props.remove("type");
        Self {
            id: id.into(),
            block_type: block_type.into(),
            props,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Shallow merge: matching keys are replaced wholesale, nested objects are
    /// not merged.
    pub fn merge_props(&mut self, partial: Props) {
        for (key, value) in partial {
            if key == "type" {
                continue;
            }
            self.props.insert(key, value);
        }
    }

    /// Deep copy of this node under a new identity
    pub fn duplicate(&self, id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            block_type: self.block_type.clone(),
            props: self.props.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_type_key_is_stripped_from_props() {
        let node = ContentBlockNode::new("n-1", "hero", props(json!({ "type": "nav", "title": "Hi" })));
        assert_eq!(node.block_type(), "hero");
        assert!(node.prop("type").is_none());
        assert_eq!(node.prop("title"), Some(&json!("Hi")));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut node = ContentBlockNode::new(
            "n-1",
            "hero",
            props(json!({ "title": "Old", "cta": { "label": "Buy", "href": "/shop" } })),
        );

        node.merge_props(props(json!({ "cta": { "label": "Go" }, "subtitle": "New" })));

        assert_eq!(node.prop("title"), Some(&json!("Old")));
        assert_eq!(node.prop("subtitle"), Some(&json!("New")));
        // Nested object replaced, not merged
        assert_eq!(node.prop("cta"), Some(&json!({ "label": "Go" })));
    }

    #[test]
    fn test_duplicate_keeps_props_by_value() {
        let node = ContentBlockNode::new("n-1", "gallery", props(json!({ "images": [{ "src": "a.png" }] })));
        let copy = node.duplicate("n-2");

        assert_eq!(copy.id(), &NodeId::from("n-2"));
        assert_eq!(copy.props(), node.props());
        assert_eq!(copy.block_type(), node.block_type());
    }

    #[test]
    fn test_normalize_type_collapses_variants() {
        assert_eq!(normalize_type("Hero-Split"), "herosplit");
        assert_eq!(normalize_type("hero_split"), "herosplit");
        assert_eq!(normalize_type("herosplit"), "herosplit");
        assert_eq!(normalize_type(" Product Grid "), "productgrid");
        assert_eq!(normalize_type(""), "");
    }

    #[test]
    fn test_reserved_ids() {
        assert!(NodeId::from("palette:hero").is_reserved());
        assert!(!NodeId::from("abc-1").is_reserved());
    }

    #[test]
    fn test_node_serialization_uses_type_key() {
        let node = ContentBlockNode::new("n-1", "footer", Props::new());
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, json!({ "id": "n-1", "type": "footer", "props": {} }));
    }
}
