//! # Document
//!
//! Ordered sequence of content blocks. Order is the page's vertical stacking
//! order.
//!
//! Nodes are stored behind `Arc` and mutated through `Arc::make_mut`, so
//! cloning a document is cheap and a clone never observes later edits made
//! to the original. The history engine relies on this for its snapshots.

use crate::{ContentBlockNode, DocumentError, NodeId, Props};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: Vec<Arc<ContentBlockNode>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document, validating every id
    pub fn from_nodes(
        nodes: impl IntoIterator<Item = ContentBlockNode>,
    ) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        for node in nodes {
            doc.push(node)?;
        }
        Ok(doc)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ContentBlockNode> {
        self.nodes.iter().map(|node| node.as_ref())
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id().clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ContentBlockNode> {
        self.nodes
            .iter()
            .find(|node| node.id() == id)
            .map(|node| node.as_ref())
    }

    pub fn at(&self, index: usize) -> Option<&ContentBlockNode> {
        self.nodes.get(index).map(|node| node.as_ref())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Mutable access to a node (copies it first if a snapshot shares it)
    pub fn node_mut(&mut self, id: &str) -> Option<&mut ContentBlockNode> {
        self.nodes
            .iter_mut()
            .find(|node| node.id() == id)
            .map(Arc::make_mut)
    }

    pub fn props_mut(&mut self, id: &str) -> Option<&mut Props> {
        self.node_mut(id).map(|node| node.props_mut())
    }

    /// Insert at `index` (clamped to the end)
    pub fn insert(&mut self, index: usize, node: ContentBlockNode) -> Result<(), DocumentError> {
        self.check_id(node.id())?;
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, Arc::new(node));
        Ok(())
    }

    pub fn push(&mut self, node: ContentBlockNode) -> Result<(), DocumentError> {
        let end = self.nodes.len();
        self.insert(end, node)
    }

    /// Remove and return the node
    pub fn remove(&mut self, id: &str) -> Option<ContentBlockNode> {
        let index = self.position(id)?;
        let node = self.nodes.remove(index);
        Some(Arc::unwrap_or_clone(node))
    }

    /// Stable array move: the node at `from` ends up at `to`, every other node
    /// keeps its relative order. Returns false if nothing moved.
    pub fn move_node(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.nodes.len() || to >= self.nodes.len() {
            return false;
        }

        let node = self.nodes.remove(from);
        self.nodes.insert(to, node);
        true
    }

    fn check_id(&self, id: &NodeId) -> Result<(), DocumentError> {
        if id.as_str().is_empty() {
            return Err(DocumentError::EmptyId);
        }
        if id.is_reserved() {
            return Err(DocumentError::ReservedId(id.to_string()));
        }
        if self.contains(id.as_str()) {
            return Err(DocumentError::DuplicateId(id.to_string()));
        }
        Ok(())
    }
}
