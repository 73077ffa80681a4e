//! # Pageforge Editor
//!
//! Editing engine for composed pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host UI: palette, canvas, properties panel  │
//! └─────────────────────────────────────────────┘
//!              ↓ operations / drops   ↑ observers
//! ┌─────────────────────────────────────────────┐
//! │ editor                                      │
//! │  - Composer: insert/reorder/update/delete   │
//! │  - drag source decoding + drop lifecycle    │
//! │  - History: linear snapshots, undo/redo     │
//! │  - EditSession: load/save through a store   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered content blocks            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are isolated**: a committed snapshot never changes again
//! 2. **Stale ids are no-ops**: UI races never surface as errors
//! 3. **Commit only on change**: no-ops leave history untouched
//! 4. **I/O failures are the only errors**: and they never touch in-memory state
//!
//! ## Usage
//!
//! ```rust
//! use pageforge_editor::EditSession;
//!
//! let mut session = EditSession::new("home");
//! let editor = session.composer_mut();
//!
//! let hero = editor.insert_from_palette("hero").unwrap();
//! let footer = editor.insert_from_palette("footer").unwrap();
//! editor.reorder(footer.as_str(), hero.as_str());
//!
//! assert!(editor.can_undo());
//! editor.undo();
//! ```

mod composer;
mod drag;
mod errors;
mod history;
mod observer;
mod operations;
pub mod palette;
mod session;
mod store;

pub use composer::Composer;
pub use drag::{DragSource, DragState, DropTarget};
pub use errors::{EditorError, StoreError};
pub use history::{History, Snapshot};
pub use observer::{CallbackObserver, EditorObserver, HistoryStatus};
pub use operations::{Operation, Outcome};
pub use session::EditSession;
pub use store::{DocumentStore, FileStore, MemoryStore};

// Re-export document types for convenience
pub use pageforge_document::{ContentBlockNode, Document, NodeId, Props};
