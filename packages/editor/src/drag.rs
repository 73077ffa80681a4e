//! # Drag and Drop
//!
//! A drag starts either from the palette (insert a new block) or from an
//! existing block (reorder). The raw identifier coming from the host UI is
//! decoded exactly once, when the drag begins, into a [`DragSource`].
//!
//! ## Lifecycle
//!
//! ```text
//!          begin_drag             drop_at(Some(target))
//!   Idle ─────────────→ DragInProgress ──────────────────→ Committing ─→ Idle
//!                             │
//!                             └── drop_at(None) / cancel_drag ──────→ Idle
//! ```

use pageforge_document::{NodeId, PALETTE_PREFIX};
use serde::{Deserialize, Serialize};

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DragSource {
    /// A palette item: insert a new block of this type
    Palette { block_type: String },

    /// An existing block: reorder it
    Node { node_id: NodeId },
}

impl DragSource {
    /// Decode a raw drag identifier. Identifiers carrying the palette prefix
    /// name a block type, everything else is a node id.
    pub fn decode(raw: &str) -> Self {
        match raw.strip_prefix(PALETTE_PREFIX) {
            Some(block_type) => DragSource::Palette {
                block_type: block_type.to_string(),
            },
            None => DragSource::Node {
                node_id: NodeId::from(raw),
            },
        }
    }

    /// Raw identifier for handing to a UI toolkit
    pub fn encode(&self) -> String {
        match self {
            DragSource::Palette { block_type } => format!("{}{}", PALETTE_PREFIX, block_type),
            DragSource::Node { node_id } => node_id.to_string(),
        }
    }
}

/// Where a drag was released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum DropTarget {
    /// Over an existing block
    Node(NodeId),

    /// Over the page but not over any block (append)
    Canvas,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DragInProgress(DragSource),
    Committing,
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn source(&self) -> Option<&DragSource> {
        match self {
            DragState::DragInProgress(source) => Some(source),
            _ => None,
        }
    }
}
