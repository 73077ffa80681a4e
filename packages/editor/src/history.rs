//! # Undo/Redo History
//!
//! Linear snapshot history of a [`Document`].
//!
//! ## Design
//!
//! - The log starts with one snapshot (the initial document)
//! - `commit` stores a copy at `cursor + 1` and drops every snapshot after
//!   the old cursor, so a new edit after an undo discards the redo states
//! - Undo/redo only move the cursor and hand back the snapshot there
//! - Undo at the first snapshot and redo at the last are no-ops, reported as
//!   `None`, never as errors
//!
//! Snapshots are isolated from the live document: `Document` stores its nodes
//! copy-on-write, so committing clones only the node pointers and any later
//! in-place edit of the live document copies the touched node first.
//!
//! ## Example
//!
//! ```rust
//! use pageforge_document::Document;
//! use pageforge_editor::History;
//!
//! let mut history = History::new(Document::new());
//! assert!(!history.can_undo());
//!
//! history.commit(&Document::new());
//! assert!(history.can_undo());
//! assert!(history.undo().is_some());
//! assert!(history.undo().is_none()); // nothing to undo
//! ```

use pageforge_document::Document;
use tracing::debug;

/// One immutable entry of the log
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Monotonically increasing across the history's lifetime
    pub revision: u64,
    pub document: Document,
}

#[derive(Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,

    /// Maximum number of snapshots kept (0 = unlimited)
    max_depth: usize,

    next_revision: u64,
}

impl History {
    /// Create an unbounded history holding `initial`
    pub fn new(initial: Document) -> Self {
        Self::with_max_depth(initial, 0)
    }

    /// Create a history that keeps at most `max_depth` snapshots (0 = unlimited).
    ///
    /// When the cap is hit the oldest snapshot is dropped, which shortens how
    /// far back undo can go.
    pub fn with_max_depth(initial: Document, max_depth: usize) -> Self {
        Self {
            snapshots: vec![Snapshot {
                revision: 0,
                document: initial,
            }],
            cursor: 0,
            max_depth,
            next_revision: 1,
        }
    }

    /// Append a snapshot of `document`, discarding any redo states
    pub fn commit(&mut self, document: &Document) -> u64 {
        self.snapshots.truncate(self.cursor + 1);

        let revision = self.next_revision;
        self.next_revision += 1;
        self.snapshots.push(Snapshot {
            revision,
            document: document.clone(),
        });

        if self.max_depth > 0 && self.snapshots.len() > self.max_depth {
            self.snapshots.remove(0);
        }

        self.cursor = self.snapshots.len() - 1;
        debug!(revision, depth = self.snapshots.len(), "committed snapshot");
        revision
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&Document> {
        if self.cursor == 0 {
            debug!("nothing to undo");
            return None;
        }

        self.cursor -= 1;
        Some(&self.snapshots[self.cursor].document)
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&Document> {
        if self.cursor + 1 >= self.snapshots.len() {
            debug!("nothing to redo");
            return None;
        }

        self.cursor += 1;
        Some(&self.snapshots[self.cursor].document)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots held
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Throw away all history and start over from `document`
    pub fn reset(&mut self, document: Document) -> u64 {
        let revision = self.next_revision;
        self.next_revision += 1;
        self.snapshots = vec![Snapshot { revision, document }];
        self.cursor = 0;
        revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_document::{ContentBlockNode, Props};

    fn doc_with(ids: &[&str]) -> Document {
        Document::from_nodes(ids.iter().map(|id| ContentBlockNode::new(*id, "text", Props::new()))).unwrap()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(Document::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_undo_redo() {
        let mut history = History::new(doc_with(&[]));
        history.commit(&doc_with(&["a"]));
        history.commit(&doc_with(&["a", "b"]));

        assert_eq!(history.undo(), Some(&doc_with(&["a"])));
        assert!(history.can_redo());
        assert_eq!(history.undo(), Some(&doc_with(&[])));
        assert_eq!(history.undo(), None);

        assert_eq!(history.redo(), Some(&doc_with(&["a"])));
        assert_eq!(history.redo(), Some(&doc_with(&["a", "b"])));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_new_commit_clears_redo() {
        let mut history = History::new(doc_with(&[]));
        history.commit(&doc_with(&["a"]));
        history.commit(&doc_with(&["a", "b"]));
        history.undo();
        history.undo();

        history.commit(&doc_with(&["c"]));

        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_snapshot_is_isolated_from_live_document() {
        let mut live = doc_with(&["a"]);
        let mut history = History::new(Document::new());
        history.commit(&live);

        live.props_mut("a").unwrap().insert("title".into(), "changed".into());

        assert!(history.current().document.get("a").unwrap().prop("title").is_none());
    }

    #[test]
    fn test_max_depth_enforced() {
        let mut history = History::with_max_depth(doc_with(&[]), 2);
        for i in 0..3 {
            let id = format!("n{}", i);
            history.commit(&doc_with(&[id.as_str()]));
        }

        assert_eq!(history.len(), 2);
        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_revisions_increase() {
        let mut history = History::new(Document::new());
        let r1 = history.commit(&doc_with(&["a"]));
        let r2 = history.commit(&doc_with(&["b"]));
        assert!(r2 > r1);

        history.undo();
        assert_eq!(history.current().revision, r1);

        let r3 = history.reset(Document::new());
        assert!(r3 > r2);
        assert_eq!(history.len(), 1);
    }
}
