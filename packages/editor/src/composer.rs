//! # Composition Engine
//!
//! Owns the live [`Document`], its [`History`], the selection and the drag
//! state. Every edit goes through [`Composer::apply`], which commits a
//! snapshot only when the document actually changed and then tells the
//! registered observers.
//!
//! Stale ids are tolerated everywhere. Drag/drop and fast UI interaction can
//! race with deletes, so addressing a node that no longer exists does nothing.

use crate::drag::{DragSource, DragState, DropTarget};
use crate::history::History;
use crate::observer::{EditorObserver, HistoryStatus};
use crate::operations::{Operation, Outcome};
use pageforge_document::{sections, ContentBlockNode, Document, IdGenerator, NodeId, Props};
use serde_json::Value;
use tracing::debug;

pub struct Composer {
    document: Document,
    history: History,
    ids: IdGenerator,

    /// Cached view of the selected node, kept in sync with its props
    selection: Option<ContentBlockNode>,

    drag: DragState,
    observers: Vec<Box<dyn EditorObserver>>,
}

impl Composer {
    pub fn new(document: Document, ids: IdGenerator) -> Self {
        Self::with_max_history(document, ids, 0)
    }

    /// Same as `new`, keeping at most `max_depth` snapshots (0 = unlimited)
    pub fn with_max_history(document: Document, ids: IdGenerator, max_depth: usize) -> Self {
        Self {
            history: History::with_max_depth(document.clone(), max_depth),
            document,
            ids,
            selection: None,
            drag: DragState::Idle,
            observers: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn add_observer(&mut self, observer: Box<dyn EditorObserver>) {
        self.observers.push(observer);
    }

    /// Apply an operation, committing to history if it changed anything
    pub fn apply(&mut self, operation: Operation) -> Outcome {
        let outcome = operation.apply(&mut self.document, &mut self.ids);

        if !outcome.is_change() {
            debug!(op = operation.name(), "operation was a no-op");
            return outcome;
        }

        let revision = self.history.commit(&self.document);
        debug!(op = operation.name(), revision, "operation committed");

        self.sync_selection();
        self.notify_history();
        outcome
    }

    /// Append a new block of `block_type` with its palette defaults
    pub fn insert_from_palette(&mut self, block_type: &str) -> Option<NodeId> {
        self.insert(block_type, None)
    }

    /// Insert a new block of `block_type` at `index`
    pub fn insert_from_palette_at(&mut self, block_type: &str, index: usize) -> Option<NodeId> {
        self.insert(block_type, Some(index))
    }

    fn insert(&mut self, block_type: &str, index: Option<usize>) -> Option<NodeId> {
        match self.apply(Operation::InsertFromPalette {
            block_type: block_type.to_string(),
            index,
        }) {
            Outcome::Inserted(id) => Some(id),
            _ => None,
        }
    }

    /// Move `source_id` into `target_id`'s slot. True if the order changed.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        self.apply(Operation::Reorder {
            source_id: NodeId::from(source_id),
            target_id: NodeId::from(target_id),
        })
        .is_change()
    }

    pub fn update_props(&mut self, id: &str, partial: Props) -> bool {
        self.apply(Operation::UpdateProps {
            node_id: NodeId::from(id),
            props: partial,
        })
        .is_change()
    }

    pub fn delete_node(&mut self, id: &str) -> bool {
        self.apply(Operation::DeleteNode {
            node_id: NodeId::from(id),
        })
        .is_change()
    }

    pub fn duplicate_node(&mut self, id: &str) -> Option<NodeId> {
        match self.apply(Operation::DuplicateNode {
            node_id: NodeId::from(id),
        }) {
            Outcome::Inserted(copy) => Some(copy),
            _ => None,
        }
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.document = snapshot.clone();
        self.sync_selection();
        self.notify_history();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.document = snapshot.clone();
        self.sync_selection();
        self.notify_history();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Replace the document wholesale (load). History restarts from it.
    pub fn replace_document(&mut self, document: Document) {
        self.history.reset(document.clone());
        self.document = document;
        self.drag = DragState::Idle;
        self.sync_selection();
        self.notify_history();
    }

    /// Load a stored section list (`{ "sections": [...] }` or a bare array),
    /// replacing the document. Nodes get fresh ids.
    pub fn load_sections(&mut self, value: &Value) {
        let document = sections::from_value(value, &mut self.ids);
        self.replace_document(document);
    }

    // Selection

    pub fn selection(&self) -> Option<&ContentBlockNode> {
        self.selection.as_ref()
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selection.as_ref().map(|node| node.id())
    }

    /// Select a node. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(node) = self.document.get(id) else {
            debug!(node_id = %id, "select of unknown node");
            return false;
        };

        self.selection = Some(node.clone());
        self.notify_selection();
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.notify_selection();
        }
    }

    /// Re-validate the cached selection against the live document
    fn sync_selection(&mut self) {
        let Some(selected) = &self.selection else {
            return;
        };

        let current = self.document.get(selected.id().as_str());
        if current == Some(selected) {
            return;
        }

        self.selection = current.cloned();
        self.notify_selection();
    }

    // Drag and drop

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Start a drag. A drag already in progress is replaced.
    pub fn begin_drag(&mut self, source: DragSource) {
        debug!(source = %source.encode(), "drag started");
        self.drag = DragState::DragInProgress(source);
    }

    /// Start a drag from a raw UI identifier
    pub fn begin_drag_raw(&mut self, raw: &str) {
        self.begin_drag(DragSource::decode(raw));
    }

    /// Abandon the drag without touching the document
    pub fn cancel_drag(&mut self) {
        if !self.drag.is_idle() {
            debug!("drag cancelled");
        }
        self.drag = DragState::Idle;
    }

    /// Finish the drag. `None` means the drag was released outside any
    /// target and is treated as a cancel.
    pub fn drop_at(&mut self, target: Option<DropTarget>) -> Outcome {
        let source = match std::mem::take(&mut self.drag) {
            DragState::DragInProgress(source) => source,
            _ => {
                debug!("drop without an active drag");
                return Outcome::Unchanged;
            }
        };

        let Some(target) = target else {
            debug!("drag released outside any target");
            return Outcome::Unchanged;
        };

        let Some(operation) = self.drop_operation(source, target) else {
            return Outcome::Unchanged;
        };

        self.drag = DragState::Committing;
        let outcome = self.apply(operation);
        self.drag = DragState::Idle;
        outcome
    }

    /// Palette drops are valid on any target; reorder drops need a distinct
    /// node target that exists.
    fn drop_operation(&self, source: DragSource, target: DropTarget) -> Option<Operation> {
        match (source, target) {
            (DragSource::Palette { block_type }, DropTarget::Canvas) => {
                Some(Operation::InsertFromPalette { block_type, index: None })
            }
            (DragSource::Palette { block_type }, DropTarget::Node(target_id)) => {
                Some(Operation::InsertFromPalette {
                    block_type,
                    index: self.document.position(target_id.as_str()),
                })
            }
            (DragSource::Node { node_id }, DropTarget::Node(target_id)) => {
                if node_id == target_id
                    || !self.document.contains(node_id.as_str())
                    || !self.document.contains(target_id.as_str())
                {
                    debug!(source = %node_id, target = %target_id, "reorder drop ignored");
                    return None;
                }
                Some(Operation::Reorder {
                    source_id: node_id,
                    target_id,
                })
            }
            (DragSource::Node { node_id }, DropTarget::Canvas) => {
                debug!(source = %node_id, "block dropped on canvas, order unchanged");
                None
            }
        }
    }

    fn notify_history(&mut self) {
        let status = self.history_status();
        for observer in &mut self.observers {
            observer.history_changed(status);
        }
    }

    fn notify_selection(&mut self) {
        for observer in &mut self.observers {
            observer.selection_changed(self.selection.as_ref());
        }
    }
}
