//! # Host Notifications
//!
//! The host UI registers observers to mirror engine state (undo/redo buttons,
//! properties panel) without polling. Observers are called synchronously
//! after the state change has completed.

use pageforge_document::ContentBlockNode;

/// Undo/redo availability after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
}

pub trait EditorObserver {
    /// The selection changed, or the selected node's props did
    fn selection_changed(&mut self, _selection: Option<&ContentBlockNode>) {}

    /// Called after every commit, undo, redo and document replacement
    fn history_changed(&mut self, _status: HistoryStatus) {}
}

/// Observer backed by closures
pub struct CallbackObserver<S, H>
where
    S: FnMut(Option<&ContentBlockNode>),
    H: FnMut(HistoryStatus),
{
    on_selection: S,
    on_history: H,
}

impl<S, H> CallbackObserver<S, H>
where
    S: FnMut(Option<&ContentBlockNode>),
    H: FnMut(HistoryStatus),
{
    pub fn new(on_selection: S, on_history: H) -> Self {
        Self {
            on_selection,
            on_history,
        }
    }
}

impl<S, H> EditorObserver for CallbackObserver<S, H>
where
    S: FnMut(Option<&ContentBlockNode>),
    H: FnMut(HistoryStatus),
{
    fn selection_changed(&mut self, selection: Option<&ContentBlockNode>) {
        (self.on_selection)(selection)
    }

    fn history_changed(&mut self, status: HistoryStatus) {
        (self.on_history)(status)
    }
}
