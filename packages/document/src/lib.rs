//! # Pageforge Document
//!
//! Pure data model for a composed page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered content blocks            │
//! │  - ContentBlockNode (id, type, props)       │
//! │  - Document (copy-on-write node storage)    │
//! │  - section transforms for load/save         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: history + composition operations    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: type resolution → virtual nodes     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The document crate enforces the structural invariants (unique ids, no
//! reserved ids) and nothing else. Validity of a block's `type` is only
//! decided at render time.
//!
//! ## Usage
//!
//! ```rust
//! use pageforge_document::{sections, IdGenerator};
//! use serde_json::json;
//!
//! let mut ids = IdGenerator::new("home");
//! let doc = sections::from_value(
//!     &json!({ "sections": [{ "type": "hero", "title": "Welcome" }] }),
//!     &mut ids,
//! );
//! assert_eq!(doc.len(), 1);
//! assert_eq!(sections::to_sections(&doc)[0]["type"], "hero");
//! ```

mod document;
mod error;
mod id_generator;
mod node;
pub mod sections;

pub use document::Document;
pub use error::DocumentError;
pub use id_generator::{get_document_seed, IdGenerator};
pub use node::{normalize_type, ContentBlockNode, NodeId, Props, PALETTE_PREFIX};
