//! # Composition Operations
//!
//! Semantic edits of a page document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each operation is one user gesture
//! 2. **Tolerant**: a stale or unknown node id is a no-op, never an error
//! 3. **Minimal**: an operation that changes nothing reports `Unchanged`, so
//!    the caller can skip the history commit
//!
//! ## Operation Semantics
//!
//! ### Reorder
//! - Stable array move of the source into the target's former slot
//! - Not a swap: every other block keeps its relative order
//!
//! ### UpdateProps
//! - Shallow merge, matching keys replaced wholesale
//!
//! ### Duplicate
//! - Deep copy of props under a fresh id, placed right after the original

use crate::palette;
use pageforge_document::{ContentBlockNode, Document, IdGenerator, NodeId, Props};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Operation {
    /// Insert a new block with palette defaults (appended when `index` is None)
    InsertFromPalette {
        block_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    /// Move `source_id` into the slot held by `target_id`
    Reorder { source_id: NodeId, target_id: NodeId },

    /// Shallow-merge props into a block
    UpdateProps { node_id: NodeId, props: Props },

    DeleteNode { node_id: NodeId },

    DuplicateNode { node_id: NodeId },
}

/// What applying an operation did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Document unchanged; nothing to commit
    Unchanged,

    /// Document changed in place
    Changed,

    /// A new block was created
    Inserted(NodeId),

    /// A block was removed
    Removed(NodeId),
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

impl Operation {
    /// Apply to `doc`, drawing fresh ids from `ids`
    pub fn apply(&self, doc: &mut Document, ids: &mut IdGenerator) -> Outcome {
        match self {
            Operation::InsertFromPalette { block_type, index } => {
                Self::apply_insert(doc, ids, block_type, *index)
            }
            Operation::Reorder { source_id, target_id } => Self::apply_reorder(doc, source_id, target_id),
            Operation::UpdateProps { node_id, props } => Self::apply_update(doc, node_id, props),
            Operation::DeleteNode { node_id } => Self::apply_delete(doc, node_id),
            Operation::DuplicateNode { node_id } => Self::apply_duplicate(doc, ids, node_id),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::InsertFromPalette { .. } => "insert_from_palette",
            Operation::Reorder { .. } => "reorder",
            Operation::UpdateProps { .. } => "update_props",
            Operation::DeleteNode { .. } => "delete_node",
            Operation::DuplicateNode { .. } => "duplicate_node",
        }
    }

    fn apply_insert(doc: &mut Document, ids: &mut IdGenerator, block_type: &str, index: Option<usize>) -> Outcome {
        let id = ids.new_unique_id(|candidate| doc.contains(candidate));
        let node = ContentBlockNode::new(id.as_str(), block_type, palette::default_props(block_type));
        let index = index.unwrap_or(doc.len());

        match doc.insert(index, node) {
            Ok(()) => Outcome::Inserted(NodeId::from(id)),
            Err(err) => {
                debug!(error = %err, "insert rejected");
                Outcome::Unchanged
            }
        }
    }

    fn apply_reorder(doc: &mut Document, source_id: &NodeId, target_id: &NodeId) -> Outcome {
        if source_id == target_id {
            return Outcome::Unchanged;
        }

        let (Some(from), Some(to)) = (doc.position(source_id.as_str()), doc.position(target_id.as_str())) else {
            debug!(source = %source_id, target = %target_id, "reorder with unknown node");
            return Outcome::Unchanged;
        };

        if doc.move_node(from, to) {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }

    fn apply_update(doc: &mut Document, node_id: &NodeId, props: &Props) -> Outcome {
        match doc.node_mut(node_id.as_str()) {
            Some(node) => {
                node.merge_props(props.clone());
                Outcome::Changed
            }
            None => {
                debug!(node_id = %node_id, "update of unknown node");
                Outcome::Unchanged
            }
        }
    }

    fn apply_delete(doc: &mut Document, node_id: &NodeId) -> Outcome {
        match doc.remove(node_id.as_str()) {
            Some(_) => Outcome::Removed(node_id.clone()),
            None => {
                debug!(node_id = %node_id, "delete of unknown node");
                Outcome::Unchanged
            }
        }
    }

    fn apply_duplicate(doc: &mut Document, ids: &mut IdGenerator, node_id: &NodeId) -> Outcome {
        let Some(index) = doc.position(node_id.as_str()) else {
            debug!(node_id = %node_id, "duplicate of unknown node");
            return Outcome::Unchanged;
        };

        let id = ids.new_unique_id(|candidate| doc.contains(candidate));
        let Some(copy) = doc.at(index).map(|original| original.duplicate(id.as_str())) else {
            return Outcome::Unchanged;
        };

        match doc.insert(index + 1, copy) {
            Ok(()) => Outcome::Inserted(NodeId::from(id)),
            Err(err) => {
                debug!(error = %err, "duplicate rejected");
                Outcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(doc: &Document) -> Vec<String> {
        doc.nodes().map(|n| n.block_type().to_string()).collect()
    }

    fn seeded(types: &[&str]) -> (Document, IdGenerator) {
        let mut doc = Document::new();
        let mut ids = IdGenerator::from_seed("t");
        for block_type in types {
            Operation::InsertFromPalette {
                block_type: block_type.to_string(),
                index: None,
            }
            .apply(&mut doc, &mut ids);
        }
        (doc, ids)
    }

    #[test]
    fn test_operation_serialization() {
        let op = Operation::UpdateProps {
            node_id: NodeId::from("t-1"),
            props: json!({ "title": "Hi" }).as_object().cloned().unwrap(),
        };

        let json = serde_json::to_string(&op).unwrap();
        let deserialized: Operation = serde_json::from_str(&json).unwrap();

        assert_eq!(op, deserialized);
    }

    #[test]
    fn test_insert_appends_or_places_at_index() {
        let (mut doc, mut ids) = seeded(&["hero", "footer"]);

        let outcome = Operation::InsertFromPalette {
            block_type: "navigation".to_string(),
            index: Some(0),
        }
        .apply(&mut doc, &mut ids);

        assert!(matches!(outcome, Outcome::Inserted(_)));
        assert_eq!(order(&doc), vec!["navigation", "hero", "footer"]);
    }

    #[test]
    fn test_reorder_is_a_move_not_a_swap() {
        let (mut doc, mut ids) = seeded(&["a", "b", "c", "d"]);
        let all = doc.ids();

        let outcome = Operation::Reorder {
            source_id: all[0].clone(),
            target_id: all[2].clone(),
        }
        .apply(&mut doc, &mut ids);

        assert_eq!(outcome, Outcome::Changed);
        assert_eq!(order(&doc), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_no_ops() {
        let (mut doc, mut ids) = seeded(&["a", "b"]);
        let all = doc.ids();

        let same = Operation::Reorder {
            source_id: all[0].clone(),
            target_id: all[0].clone(),
        };
        let missing = Operation::Reorder {
            source_id: NodeId::from("nope"),
            target_id: all[1].clone(),
        };

        assert_eq!(same.apply(&mut doc, &mut ids), Outcome::Unchanged);
        assert_eq!(missing.apply(&mut doc, &mut ids), Outcome::Unchanged);
        assert_eq!(order(&doc), vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let (mut doc, mut ids) = seeded(&["hero"]);
        let before = doc.clone();
        let ghost = NodeId::from("ghost");

        assert_eq!(
            Operation::UpdateProps { node_id: ghost.clone(), props: Props::new() }.apply(&mut doc, &mut ids),
            Outcome::Unchanged
        );
        assert_eq!(Operation::DeleteNode { node_id: ghost.clone() }.apply(&mut doc, &mut ids), Outcome::Unchanged);
        assert_eq!(Operation::DuplicateNode { node_id: ghost }.apply(&mut doc, &mut ids), Outcome::Unchanged);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let (mut doc, mut ids) = seeded(&["hero", "footer"]);
        let hero = doc.ids()[0].clone();

        let Outcome::Inserted(copy_id) = Operation::DuplicateNode { node_id: hero.clone() }.apply(&mut doc, &mut ids)
        else {
            panic!("expected insert");
        };

        assert_ne!(copy_id, hero);
        assert_eq!(doc.position(copy_id.as_str()), Some(1));
        assert_eq!(doc.get(copy_id.as_str()).unwrap().props(), doc.get(hero.as_str()).unwrap().props());
    }
}
